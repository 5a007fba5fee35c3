// src/services/admission.rs
//! Process-wide ceiling on concurrently executing protocol operations.
//!
//! One `AdmissionController` is built in `main` and shared by `Arc` with
//! every request path. The counter only moves through `try_admit` and
//! `release`, and stays within `0..=max_concurrent` at every instant.
//!
//! Callers should hold an [`AdmissionPermit`] rather than pairing
//! `try_admit`/`release` by hand. Splitting the pair across a pre-request
//! hook and a post-response hook leaks a slot whenever the post hook is
//! skipped (for example after the response was already committed), and the
//! service eventually wedges at the ceiling. The permit releases in `Drop`,
//! which also covers early returns, panics and dropped futures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error};

use crate::common::config::AdmissionConfig;

#[derive(Debug)]
pub struct AdmissionController {
    in_flight: AtomicUsize,
    max_concurrent: usize,
}

impl AdmissionController {
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_concurrent: config.max_concurrent,
        }
    }

    /// Reserves a slot if one is free. Check and increment happen in a
    /// single compare-and-swap, so a rejected attempt never moves the
    /// counter.
    pub fn try_admit(&self) -> bool {
        let max = self.max_concurrent;
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current < max).then_some(current + 1)
            })
            .is_ok()
    }

    /// Returns a slot taken by a successful `try_admit`.
    pub fn release(&self) {
        let released = self
            .in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(1)
            });
        if released.is_err() {
            error!("Admission release without a matching admit");
        }
    }

    /// Scoped admission: `None` when the ceiling is reached.
    pub fn admit(self: &Arc<Self>) -> Option<AdmissionPermit> {
        if self.try_admit() {
            debug!(in_flight = self.in_flight(), "Request admitted");
            Some(AdmissionPermit {
                controller: Arc::clone(self),
            })
        } else {
            None
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}

/// A held admission slot, released exactly once when dropped.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct AdmissionPermit {
    controller: Arc<AdmissionController>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.controller.release();
    }
}
