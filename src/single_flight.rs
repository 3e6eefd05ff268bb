//! Single-Flight Mutations
//!
//! Collapses repeated user activations into at most one outstanding request.

use std::future::Future;

use leptos::prelude::*;

/// Busy flag plus a trigger that refuses to start while a run is in flight.
///
/// The flag is a signal, so views can disable their controls with
/// [`SingleFlight::is_busy`].
#[derive(Clone, Copy)]
pub struct SingleFlight {
    busy: RwSignal<bool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
        }
    }

    /// Reactive busy flag
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Run `op` unless another run is in flight.
    ///
    /// Returns `None` without calling `op` when busy. The flag is cleared when
    /// the run completes or its future is dropped.
    pub async fn run<F, Fut, T>(&self, op: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _guard = self.try_begin()?;
        Some(op().await)
    }

    fn try_begin(&self) -> Option<FlightGuard> {
        if self.busy.try_get_untracked().unwrap_or(true) {
            tracing::debug!("single-flight trigger rejected while busy");
            return None;
        }
        self.busy.set(true);
        Some(FlightGuard { busy: self.busy })
    }
}

impl Default for SingleFlight {
    fn default() -> Self {
        Self::new()
    }
}

struct FlightGuard {
    busy: RwSignal<bool>,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        // The owning view may already be gone after a navigation
        let _ = self.busy.try_set(false);
    }
}
