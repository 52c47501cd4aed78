//! Read cursor over an immutable input buffer.
//!
//! The cursor never fails. Reads past the end are served as zero bytes, and
//! the first such read moves the cursor from [`DataState::Sufficient`] to
//! [`DataState::Exhausted`], which is absorbing: the offset only grows, so
//! the condition that caused the transition holds for every later check.

use std::fmt;

use crate::config::ExhaustionPolicy;
use crate::hook::{ExhaustionEvent, ExhaustionHook};

/// Exhaustion state of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataState {
    /// Every read so far was fully backed by input bytes.
    Sufficient,
    /// At least one read needed bytes beyond the end of the input.
    Exhausted,
}

impl DataState {
    /// Whether the input has run out.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self == DataState::Exhausted
    }
}

/// Offset-tracking cursor with sticky exhaustion.
pub struct Cursor {
    data: Box<[u8]>,
    offset: usize,
    state: DataState,
    policy: ExhaustionPolicy,
    hook: Option<ExhaustionHook>,
    hook_fired: bool,
}

impl Cursor {
    /// Create a cursor at offset 0. An empty buffer starts exhausted.
    pub fn new(data: impl Into<Vec<u8>>, policy: ExhaustionPolicy) -> Self {
        let data = data.into().into_boxed_slice();
        let state = if data.is_empty() {
            DataState::Exhausted
        } else {
            DataState::Sufficient
        };
        Self {
            data,
            offset: 0,
            state,
            policy,
            hook: None,
            hook_fired: false,
        }
    }

    /// Install the exhaustion hook.
    ///
    /// The hook only runs under [`ExhaustionPolicy::Stop`], and a cursor runs
    /// a hook at most once. If the cursor is already exhausted and no hook has
    /// run yet, the new one runs immediately; a replacement installed after
    /// that never runs.
    pub fn set_hook(&mut self, hook: ExhaustionHook) {
        self.hook = Some(hook);
        if self.state.is_exhausted() {
            self.notify(0);
        }
    }

    /// Current read offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total input length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the input buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Input bytes at or after the offset.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// The full input buffer.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current exhaustion state.
    #[must_use]
    pub fn state(&self) -> DataState {
        self.state
    }

    /// Configured exhaustion policy.
    #[must_use]
    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Returns `true` iff `width` bytes are available from the offset.
    ///
    /// On `false` the cursor becomes exhausted.
    pub fn check_enough_data(&mut self, width: usize) -> bool {
        let fits = self
            .offset
            .checked_add(width)
            .is_some_and(|end| end <= self.data.len());
        if !fits {
            self.exhaust(width);
        }
        fits
    }

    /// Move the offset forward by `width`, whether or not the bytes existed.
    pub fn advance(&mut self, width: usize) {
        self.offset = self.offset.saturating_add(width);
    }

    /// Check then advance; the check result does not gate the advance.
    pub fn consume_width(&mut self, width: usize) -> bool {
        let fits = self.check_enough_data(width);
        self.advance(width);
        fits
    }

    /// Copy bytes from the offset into `out`, zero-filling past the end.
    ///
    /// Does not move the cursor.
    pub fn read_padded(&self, out: &mut [u8]) {
        let available = self.data.get(self.offset..).unwrap_or(&[]);
        let copied = out.len().min(available.len());
        let (head, tail) = out.split_at_mut(copied);
        head.copy_from_slice(available.get(..copied).unwrap_or(&[]));
        tail.fill(0);
    }

    fn exhaust(&mut self, requested: usize) {
        if self.state.is_exhausted() {
            return;
        }
        self.state = DataState::Exhausted;
        tracing::debug!(
            offset = self.offset,
            requested,
            len = self.data.len(),
            "Fuzz input exhausted"
        );
        self.notify(requested);
    }

    fn notify(&mut self, requested: usize) {
        if self.policy != ExhaustionPolicy::Stop || self.hook_fired {
            return;
        }
        let event = ExhaustionEvent {
            offset: self.offset,
            requested,
            len: self.data.len(),
        };
        if let Some(hook) = self.hook.as_mut() {
            tracing::trace!(?event, "Running exhaustion hook");
            self.hook_fired = true;
            hook(&event);
        }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("len", &self.data.len())
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("hook", &self.hook.is_some())
            .field("hook_fired", &self.hook_fired)
            .finish()
    }
}
