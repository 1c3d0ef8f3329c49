use super::*;

pub trait Cast {
  /// Checked downcast. `what` names the value in the error.
  fn cast<T: JsCast>(self, what: &str) -> Result<T, Error>;
}

impl<V: JsCast> Cast for V {
  fn cast<T: JsCast>(self, what: &str) -> Result<T, Error> {
    self.dyn_into::<T>().map_err(|_| {
      error::Cast {
        what,
        ty: any::type_name::<T>(),
      }
      .build()
    })
  }
}
