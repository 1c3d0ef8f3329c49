use {
  serde::{Deserialize, Serialize},
  snafu::{ensure, OptionExt, Snafu},
  std::{
    cell::{Cell, RefCell},
    fmt::{self, Display, Formatter},
    ops::RangeInclusive,
    rc::Rc,
  },
  strum::{EnumString, IntoStaticStr},
};

pub use {
  error::Error,
  input::{Field, UserInput},
  project::{Id, Project, ProjectStatus},
  state::{Listener, ProjectState, State},
  validation::{validate, Validatable, Value},
};

mod error;
mod input;
mod project;
mod state;
mod validation;
