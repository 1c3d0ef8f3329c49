use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("`{what}` is not a `{ty}`"))]
  Cast { what: String, ty: &'static str },
  #[snafu(display("`{call}` failed: {message}"))]
  Call { call: &'static str, message: String },
  #[snafu(display("window has no document"))]
  DocumentMissing,
  #[snafu(display("no element with id `{id}`"))]
  ElementMissing { id: String },
  #[snafu(display("no element matches `{selector}`"))]
  SelectorMissing { selector: String },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("template `{id}` has no element"))]
  TemplateEmpty { id: String },
  #[snafu(display("no window"))]
  WindowMissing,
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
