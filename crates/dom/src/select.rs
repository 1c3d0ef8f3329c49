use super::*;

pub trait Select {
  fn select<T: JsCast>(&self, selector: &str) -> Result<T, Error>;
}

impl<E: AsRef<Element>> Select for E {
  fn select<T: JsCast>(&self, selector: &str) -> Result<T, Error> {
    self
      .as_ref()
      .query_selector(selector)
      .call("querySelector")?
      .context(error::SelectorMissing { selector })?
      .cast(selector)
  }
}
