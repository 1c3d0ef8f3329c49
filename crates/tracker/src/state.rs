use super::*;

pub type Listener<T> = Rc<dyn Fn(&[T])>;

pub struct State<T> {
  listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for State<T> {
  fn default() -> Self {
    Self {
      listeners: RefCell::new(Vec::new()),
    }
  }
}

impl<T> State<T> {
  pub fn add_listener(&self, listener: impl Fn(&[T]) + 'static) {
    self.listeners.borrow_mut().push(Rc::new(listener));
  }

  pub fn listeners(&self) -> usize {
    self.listeners.borrow().len()
  }

  /// Calls every listener registered before this call, in registration order.
  /// The registry is not borrowed while listeners run, so they may register
  /// further listeners.
  pub fn notify(&self, items: &[T]) {
    let listeners = self.listeners.borrow().clone();

    for listener in listeners {
      listener(items);
    }
  }
}

pub struct ProjectState {
  next: Cell<u64>,
  notifying: Cell<bool>,
  pending: Cell<bool>,
  projects: RefCell<Vec<Project>>,
  state: State<Project>,
}

impl ProjectState {
  /// The shared instance, created on first access and kept alive for the
  /// lifetime of the thread.
  pub fn instance() -> Rc<Self> {
    thread_local! {
      static INSTANCE: Rc<ProjectState> = Rc::new(ProjectState::new());
    }

    INSTANCE.with(Rc::clone)
  }

  fn new() -> Self {
    Self {
      next: Cell::new(0),
      notifying: Cell::new(false),
      pending: Cell::new(false),
      projects: RefCell::new(Vec::new()),
      state: State::default(),
    }
  }

  pub fn add_listener(&self, listener: impl Fn(&[Project]) + 'static) {
    self.state.add_listener(listener);
  }

  /// Projects added by a listener while listeners are being notified are
  /// delivered in a further round once the current round finishes, so every
  /// listener's last call sees the full list.
  pub fn add_project(
    &self,
    title: impl Into<String>,
    description: impl Into<String>,
    people: u32,
  ) -> Id {
    let id = Id::from(self.next.get());
    self.next.set(self.next.get() + 1);

    let project = Project::new(id, title.into(), description.into(), people);

    log::debug!("adding project {id}: {}", project.title);

    self.projects.borrow_mut().push(project);

    if self.notifying.get() {
      self.pending.set(true);
      return id;
    }

    self.notifying.set(true);

    loop {
      self.pending.set(false);
      self.state.notify(&self.projects());

      if !self.pending.get() {
        break;
      }
    }

    self.notifying.set(false);

    id
  }

  pub fn projects(&self) -> Vec<Project> {
    self.projects.borrow().clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn titles(projects: &[Project]) -> Vec<String> {
    projects
      .iter()
      .map(|project| project.title.clone())
      .collect()
  }

  #[test]
  fn instance_is_shared() {
    let a = ProjectState::instance();
    let b = ProjectState::instance();

    assert!(Rc::ptr_eq(&a, &b));

    let id = a.add_project("shared", "description", 2);

    assert!(b.projects().iter().any(|project| project.id == id));
  }

  #[test]
  fn instance_is_per_thread() {
    let here = ProjectState::instance();
    here.add_project("here", "description", 1);

    std::thread::spawn(|| {
      assert!(ProjectState::instance().projects().is_empty());
    })
    .join()
    .unwrap();
  }

  #[test]
  fn add_project_appends_active_project() {
    let state = ProjectState::new();

    let first = state.add_project("first", "first description", 1);
    let second = state.add_project("second", "second description", 5);

    assert_ne!(first, second);

    let projects = state.projects();

    assert_eq!(titles(&projects), ["first", "second"]);
    assert_eq!(projects[1].id, second);
    assert_eq!(projects[1].description, "second description");
    assert_eq!(projects[1].people, 5);
    assert_eq!(projects[1].status, ProjectStatus::Active);
  }

  #[test]
  fn listeners_receive_full_list_in_registration_order() {
    let state = ProjectState::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    for name in ["a", "b"] {
      let calls = calls.clone();
      state.add_listener(move |projects| {
        calls.borrow_mut().push((name, titles(projects)));
      });
    }

    state.add_project("one", "description", 1);
    state.add_project("two", "description", 2);

    assert_eq!(
      *calls.borrow(),
      [
        ("a", vec!["one".to_string()]),
        ("b", vec!["one".to_string()]),
        ("a", vec!["one".to_string(), "two".to_string()]),
        ("b", vec!["one".to_string(), "two".to_string()]),
      ],
    );
  }

  #[test]
  fn listeners_added_late_only_see_later_changes() {
    let state = ProjectState::new();
    state.add_project("early", "description", 1);

    let seen = Rc::new(Cell::new(0));

    {
      let seen = seen.clone();
      state.add_listener(move |projects| seen.set(projects.len()));
    }

    assert_eq!(seen.get(), 0);

    state.add_project("late", "description", 1);

    assert_eq!(seen.get(), 2);
  }

  #[test]
  fn listeners_may_register_listeners() {
    let state = Rc::new(ProjectState::new());
    let inner_calls = Rc::new(Cell::new(0));

    {
      let weak = Rc::downgrade(&state);
      let inner_calls = inner_calls.clone();
      state.add_listener(move |_| {
        let inner_calls = inner_calls.clone();
        if let Some(state) = weak.upgrade() {
          state.add_listener(move |_| inner_calls.set(inner_calls.get() + 1));
        }
      });
    }

    state.add_project("one", "description", 1);

    assert_eq!(inner_calls.get(), 0);
    assert_eq!(state.state.listeners(), 2);

    state.add_project("two", "description", 1);

    assert_eq!(inner_calls.get(), 1);
  }

  #[test]
  fn listeners_may_add_projects() {
    let state = Rc::new(ProjectState::new());

    {
      let weak = Rc::downgrade(&state);
      state.add_listener(move |projects| {
        if projects.len() == 1 {
          if let Some(state) = weak.upgrade() {
            state.add_project("follow-up", "description", 1);
          }
        }
      });
    }

    state.add_project("first", "description", 1);

    assert_eq!(titles(&state.projects()), ["first", "follow-up"]);
  }

  #[test]
  fn later_listeners_end_with_current_list() {
    let state = Rc::new(ProjectState::new());

    {
      let weak = Rc::downgrade(&state);
      state.add_listener(move |projects| {
        if projects.len() == 1 {
          if let Some(state) = weak.upgrade() {
            state.add_project("follow-up", "description", 1);
          }
        }
      });
    }

    let seen = Rc::new(RefCell::new(Vec::new()));

    {
      let seen = seen.clone();
      state.add_listener(move |projects| seen.borrow_mut().push(titles(projects)));
    }

    state.add_project("first", "description", 1);

    assert_eq!(state.projects().len(), 2);
    assert_eq!(
      *seen.borrow(),
      [
        vec!["first".to_string()],
        vec!["first".to_string(), "follow-up".to_string()],
      ],
    );
  }
}
