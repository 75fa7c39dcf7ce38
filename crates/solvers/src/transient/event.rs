/// Event emitted after each completed step.
///
/// Step 0 carries the initial state pulled from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub step: usize,
    pub time: f64,

    /// ODE state after the step, in slot order.
    pub state: Vec<f64>,
}
