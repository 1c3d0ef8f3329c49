use super::*;

pub trait EventTargetExt {
  fn add_event_listener<E, F, R>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static;
}

impl<T: AsRef<EventTarget>> EventTargetExt for T {
  /// Listeners stay registered for the lifetime of the page.
  fn add_event_listener<E, F, R>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static,
  {
    let closure = Closure::<dyn FnMut(E) -> R>::new(callback);
    self
      .as_ref()
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .call("addEventListener")?;
    closure.forget();
    Ok(())
  }
}
