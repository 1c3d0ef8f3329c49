use super::*;

/// Where a mounted element goes relative to its host's children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsertPosition {
  AfterBegin,
  BeforeEnd,
}

impl InsertPosition {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::AfterBegin => "afterbegin",
      Self::BeforeEnd => "beforeend",
    }
  }
}

/// An element cloned from a `<template>` and attached to a host element.
pub struct Mount<H, E> {
  pub template: HtmlTemplateElement,
  pub host: H,
  pub element: E,
}

impl<H, E> Mount<H, E>
where
  H: JsCast + AsRef<Element>,
  E: JsCast + AsRef<Element>,
{
  pub fn new(
    template_id: &str,
    host_id: &str,
    position: InsertPosition,
    element_id: Option<&str>,
  ) -> Result<Self, Error> {
    let document = document()?;

    let template = element_by_id::<HtmlTemplateElement>(&document, template_id)?;
    let host = element_by_id::<H>(&document, host_id)?;

    let fragment = document
      .import_node_with_deep(&template.content(), true)
      .call("importNode")?
      .cast::<DocumentFragment>(template_id)?;

    let element = fragment
      .first_element_child()
      .context(error::TemplateEmpty { id: template_id })?
      .cast::<E>(template_id)?;

    if let Some(id) = element_id {
      AsRef::<Element>::as_ref(&element).set_id(id);
    }

    AsRef::<Element>::as_ref(&host)
      .insert_adjacent_element(position.as_str(), AsRef::<Element>::as_ref(&element))
      .call("insertAdjacentElement")?;

    log::trace!(
      "mounted <template id={template_id}> into #{host_id} at {}",
      position.as_str()
    );

    Ok(Self {
      template,
      host,
      element,
    })
  }
}

pub trait Component: Sized + 'static {
  type Host: JsCast + AsRef<Element>;
  type Element: JsCast + AsRef<Element>;

  fn mount(&self) -> &Mount<Self::Host, Self::Element>;

  fn element(&self) -> &Self::Element {
    &self.mount().element
  }

  /// Registers event handlers and state listeners, which may hold clones of
  /// `self`.
  fn configure(self: &Rc<Self>) -> Result<(), Error>;

  fn render_content(&self) -> Result<(), Error>;
}
