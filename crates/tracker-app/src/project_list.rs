use super::*;

pub(crate) struct ProjectList {
  assigned: RefCell<Vec<Project>>,
  mount: Mount<HtmlDivElement, HtmlElement>,
  status: ProjectStatus,
}

impl ProjectList {
  pub(crate) fn new(status: ProjectStatus) -> Result<Rc<Self>, Error> {
    let list = Rc::new(Self {
      assigned: RefCell::default(),
      mount: Mount::new(
        "project-list",
        "app",
        InsertPosition::BeforeEnd,
        Some(format!("{status}-projects").as_str()),
      )?,
      status,
    });

    list.configure()?;
    list.render_content()?;

    Ok(list)
  }

  fn list_id(&self) -> String {
    format!("{}-projects-list", self.status)
  }

  fn render_projects(&self) -> Result<(), Error> {
    let document = dom::document()?;

    let list = dom::element_by_id::<HtmlUListElement>(&document, &self.list_id())?;

    list.set_inner_html("");

    for project in self.assigned.borrow().iter() {
      let item = document.create_element("li").call("createElement")?;
      item.set_text_content(Some(&project.title));
      list.append_child(&item).call("appendChild")?;
    }

    Ok(())
  }
}

impl Component for ProjectList {
  type Host = HtmlDivElement;
  type Element = HtmlElement;

  fn mount(&self) -> &Mount<HtmlDivElement, HtmlElement> {
    &self.mount
  }

  fn configure(self: &Rc<Self>) -> Result<(), Error> {
    let list = self.clone();

    ProjectState::instance().add_listener(move |projects| {
      *list.assigned.borrow_mut() = list.status.assigned(projects);

      if let Err(err) = list.render_projects() {
        log::error!("failed to render {} projects: {err}", list.status);
      }
    });

    Ok(())
  }

  fn render_content(&self) -> Result<(), Error> {
    self
      .element()
      .select::<HtmlUListElement>("ul")?
      .set_id(&self.list_id());

    self
      .element()
      .select::<HtmlElement>("h2")?
      .set_text_content(Some(&self.status.heading()));

    Ok(())
  }
}
