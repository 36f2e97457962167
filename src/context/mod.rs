//! Cooperative cancellation for long-running kernels.
//!
//! Kernels accept a [`Context`] and poll it at natural iteration boundaries:
//! per output row for element-wise and product kernels, per recursion level
//! for Strassen. A cancelled context makes the kernel return
//! [`SemlaError::Cancelled`]; the output container must then be discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, SemlaError};

/// Shared cancellation token. Cloning shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token. All clones observe the cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Err(Cancelled) once the token has fired.
    pub(crate) fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SemlaError::Cancelled)
        } else {
            Ok(())
        }
    }
}
