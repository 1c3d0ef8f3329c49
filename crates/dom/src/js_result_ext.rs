use super::*;

pub trait JsResultExt<T> {
  fn call(self, call: &'static str) -> Result<T, Error>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
  fn call(self, call: &'static str) -> Result<T, Error> {
    self.map_err(|value| {
      error::Call {
        call,
        message: value
          .as_string()
          .unwrap_or_else(|| format!("{value:?}")),
      }
      .build()
    })
  }
}
