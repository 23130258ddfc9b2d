//! Loading-indicator capability.
//!
//! The bot shows an interim "loading" message while a pipeline call is in
//! flight and removes it afterwards. The pipeline itself never depends on
//! this; the dispatcher wraps its calls with whichever implementation the
//! platform offers.

/// Capability interface the surrounding transport implements.
pub trait ProgressIndicator {
    type Handle;

    /// Show an interim message; the handle removes it later.
    fn show(&self, text: &str) -> Self::Handle;

    /// Remove a previously shown message.
    fn dismiss(&self, handle: Self::Handle);
}

/// Terminal implementation: the indicator goes to stderr so it never mixes
/// with rendered output, and "removal" is a no-op (terminal lines stay).
pub struct StderrProgress;

impl ProgressIndicator for StderrProgress {
    type Handle = ();

    fn show(&self, text: &str) -> Self::Handle {
        eprintln!("{text}");
    }

    fn dismiss(&self, _handle: Self::Handle) {}
}
