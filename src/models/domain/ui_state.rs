use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::{AppError, AppResult};

/// Busy/idle flag guarding the generate action. Only one generation may be
/// in flight; a second trigger is refused rather than queued.
#[derive(Debug, Default)]
pub struct UiState {
    busy: AtomicBool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Enters the busy state. Idle is restored when the guard drops.
    pub fn enter(&self) -> AppResult<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Busy("A generation is already in progress".to_string()))?;
        Ok(BusyGuard { state: self })
    }
}

#[must_use = "dropping the guard immediately returns to idle"]
#[derive(Debug)]
pub struct BusyGuard<'a> {
    state: &'a UiState,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.busy.store(false, Ordering::Release);
    }
}
