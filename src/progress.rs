// src/progress.rs
/// Status reporting for a run. Frontends implement what they care about.
pub trait Progress {
    /// Called once the player count is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One player row is ready.
    fn item_done(&mut self, _entry: usize, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
