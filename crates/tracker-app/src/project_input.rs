use super::*;

pub(crate) struct ProjectInput {
  description: HtmlTextAreaElement,
  mount: Mount<HtmlDivElement, HtmlFormElement>,
  people: HtmlInputElement,
  title: HtmlInputElement,
}

impl ProjectInput {
  pub(crate) fn new() -> Result<Rc<Self>, Error> {
    let mount = Mount::<HtmlDivElement, HtmlFormElement>::new(
      "project-input",
      "app",
      InsertPosition::AfterBegin,
      Some("user-input"),
    )?;

    let input = Rc::new(Self {
      description: mount.element.select("#description")?,
      people: mount.element.select("#people")?,
      title: mount.element.select("#title")?,
      mount,
    });

    input.configure()?;

    Ok(input)
  }

  fn gather(&self) -> Result<UserInput, tracker::Error> {
    UserInput::gather(
      &self.title.value(),
      &self.description.value(),
      &self.people.value(),
    )
  }

  fn submit(&self, event: Event) -> Result<(), Error> {
    event.prevent_default();

    match self.gather() {
      Ok(UserInput {
        title,
        description,
        people,
      }) => {
        ProjectState::instance().add_project(title, description, people);
        self.clear();
      }
      Err(err) => {
        log::warn!("rejected project input: {err}");
        dom::alert(UserInput::ALERT)?;
      }
    }

    Ok(())
  }

  fn clear(&self) {
    self.element().reset();
  }
}

impl Component for ProjectInput {
  type Host = HtmlDivElement;
  type Element = HtmlFormElement;

  fn mount(&self) -> &Mount<HtmlDivElement, HtmlFormElement> {
    &self.mount
  }

  fn configure(self: &Rc<Self>) -> Result<(), Error> {
    let input = self.clone();

    self
      .element()
      .add_event_listener("submit", move |event: Event| {
        if let Err(err) = input.submit(event) {
          log::error!("failed to submit project: {err}");
        }
      })
  }

  fn render_content(&self) -> Result<(), Error> {
    Ok(())
  }
}
