use {
  snafu::{OptionExt, Snafu},
  std::{any, rc::Rc},
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{Document, DocumentFragment, Element, EventTarget, HtmlTemplateElement},
};

pub use {
  self::{
    cast::Cast,
    component::{Component, InsertPosition, Mount},
    error::Error,
    event_target_ext::EventTargetExt,
    js_result_ext::JsResultExt,
    select::Select,
  },
  log, wasm_bindgen, web_sys,
};

mod cast;
mod component;
mod error;
mod event_target_ext;
mod js_result_ext;
mod select;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub fn document() -> Result<Document, Error> {
  web_sys::window()
    .context(error::WindowMissing)?
    .document()
    .context(error::DocumentMissing)
}

pub fn alert(message: &str) -> Result<(), Error> {
  web_sys::window()
    .context(error::WindowMissing)?
    .alert_with_message(message)
    .call("alert")
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, Error> {
  document
    .get_element_by_id(id)
    .context(error::ElementMissing { id })?
    .cast(id)
}
