/// Event emitted by a system solver for each committed point.
///
/// Step 0 is the initial condition. Steps `1..N` follow each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// Time of the committed point.
    pub time: f64,

    /// Committed state vector.
    pub state: &'a [f64],
}
