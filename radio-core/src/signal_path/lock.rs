//! Caller-provided locking for signal path reconfiguration.
//!
//! `SignalPath` takes any `SignalPathLock` so that embedders can choose the
//! synchronization primitive appropriate to their runtime (a plain
//! `std::sync::Mutex` for a blocking audio thread, or something
//! reentrant-aware for an async host).

use std::sync::Mutex;

pub trait SignalPathLock {
    /// Runs `f` with exclusive access, for the duration of a configuration
    /// change or a processing call.
    fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T;
}

/// Default lock backed by `std::sync::Mutex<()>`, matching the reference
/// crate's use of `std::sync` primitives directly rather than a third-party
/// lock crate.
pub struct StdMutexLock {
    mutex: Mutex<()>,
}

impl StdMutexLock {
    pub fn new() -> Self {
        Self { mutex: Mutex::new(()) }
    }
}

impl Default for StdMutexLock {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPathLock for StdMutexLock {
    fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_closure_and_returns_its_value() {
        let lock = StdMutexLock::new();
        let value = lock.with_lock(|| 42);
        assert_eq!(value, 42);
    }
}
