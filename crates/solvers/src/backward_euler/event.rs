/// Event emitted by the backward Euler solver for each committed point.
///
/// Step 0 is the initial condition and reports zero Newton iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// Time of the committed point.
    pub time: f64,

    /// Committed state.
    pub y: f64,

    /// Newton iterations needed to converge on this point.
    pub newton_iters: usize,
}
