//! Stop signal for graceful shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::error::Result;

/// Cloneable stop flag shared between the control loop and whoever may
/// end it (a Ctrl-C handler, a test, another thread).
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    /// New signal, not yet raised
    pub fn new() -> Self {
        Self::default()
    }

    /// New signal raised by Ctrl-C.
    ///
    /// Only one handler can be installed per process.
    pub fn install_ctrl_c() -> Result<Self> {
        let signal = Self::new();
        let handle = signal.clone();
        ctrlc::set_handler(move || {
            info!("Received shutdown signal");
            handle.request_stop();
        })?;
        Ok(signal)
    }

    /// Ask the loop to finish after the current cycle
    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Has a stop been requested?
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let signal = StopSignal::new();
        let other = signal.clone();
        assert!(!other.is_stopped());

        signal.request_stop();
        assert!(other.is_stopped());
    }

    #[test]
    fn test_raised_from_another_thread() {
        let signal = StopSignal::new();
        let handle = signal.clone();
        std::thread::spawn(move || handle.request_stop())
            .join()
            .unwrap();
        assert!(signal.is_stopped());
    }
}
