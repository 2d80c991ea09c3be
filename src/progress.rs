// src/progress.rs
/// Lightweight progress reporting used by the long-running stages
/// (cover fetch, image processing). Frontends implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item finished (a cover downloaded, an image resized).
    fn item_done(&mut self, _label: &str) {}

    /// One item failed and was skipped; the batch continues.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
