use {
  self::{project_input::ProjectInput, project_list::ProjectList},
  dom::{log, Component, Error, EventTargetExt, InsertPosition, JsResultExt, Mount, Select},
  std::{cell::RefCell, rc::Rc},
  tracker::{Project, ProjectState, ProjectStatus, UserInput},
  wasm_bindgen::{prelude::wasm_bindgen, JsValue},
  wasm_bindgen_futures,
  web_sys::{
    Event, HtmlDivElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    HtmlUListElement,
  },
};

mod project_input;
mod project_list;

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  dom::initialize_console(log::Level::Debug)?;

  ProjectInput::new()?;
  ProjectList::new(ProjectStatus::Active)?;
  ProjectList::new(ProjectStatus::Finished)?;

  Ok(())
}
