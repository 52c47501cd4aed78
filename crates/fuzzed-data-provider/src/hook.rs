//! Exhaustion notification.
//!
//! Under [`ExhaustionPolicy::Stop`](crate::ExhaustionPolicy::Stop) the cursor
//! calls the installed hook once, at the moment the input first runs out. The
//! harness decides what that means: flag the iteration, unwind to the driver,
//! or end the process via [`terminate_process`].

/// Details of the read that exhausted the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustionEvent {
    /// Cursor offset at the start of the failing read.
    pub offset: usize,
    /// Width of the failing read in bytes.
    pub requested: usize,
    /// Total input length.
    pub len: usize,
}

impl ExhaustionEvent {
    /// Bytes the failing read wanted beyond the end of the input.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.offset
            .saturating_add(self.requested)
            .saturating_sub(self.len)
    }
}

/// Callback invoked on first exhaustion.
pub type ExhaustionHook = Box<dyn FnMut(&ExhaustionEvent) + Send>;

/// Hook that ends the process with a success status.
///
/// This is the fast-fail escape hatch for harnesses that want an iteration to
/// finish as soon as the input is used up. The exit is irrevocable: no
/// destructors run.
#[must_use]
#[expect(clippy::exit, reason = "opt-in fast-fail ends the fuzz iteration")]
pub fn terminate_process() -> ExhaustionHook {
    Box::new(|event: &ExhaustionEvent| {
        tracing::info!(
            offset = event.offset,
            requested = event.requested,
            len = event.len,
            "Input exhausted, terminating fuzz iteration"
        );
        std::process::exit(0)
    })
}
