/// Control actions supported by the transient steppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the state so far.
    StopEarly,
}
