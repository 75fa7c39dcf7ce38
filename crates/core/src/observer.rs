/// Watches events emitted while an ODE is being stepped.
///
/// A stepper hands each event to its observer after the event has been
/// produced. Returning `Some(action)` asks the stepper for a stepper-specific
/// action (such as stopping early); returning `None` lets it carry on.
///
/// Implemented for:
///
/// - closures `FnMut(&E) -> Option<A>`
/// - `()`, which ignores every event
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
