/// Indicates how the stepper terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a transient integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: Status,

    /// Number of steps completed.
    pub steps: usize,

    /// Time reached after the last completed step.
    pub time: f64,

    /// ODE state after the last completed step.
    pub state: Vec<f64>,
}
