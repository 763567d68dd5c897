//=========================================================================
// Round Timer
//=========================================================================
//
// Count-up clock for a single game round.
//
// A background thread wakes once per tick interval (one second in the
// game) and increments an atomic elapsed counter. The frame loop reads
// the counter at any time without locking.
//
// Shutdown is a cancellation flag, not a channel handshake: `stop()`
// sets the flag and returns immediately, and the tick thread exits on
// its next wakeup. Stopping twice, or reading after stop, is safe.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::tick;
use log::debug;

//=== RoundTimer ==========================================================

/// Elapsed-seconds counter backed by a background tick thread.
///
/// Created when a round starts, stopped when it ends. The thread is
/// detached; after `stop()` it terminates within one tick interval.
pub struct RoundTimer {
    elapsed: Arc<AtomicU64>,
    stopped: Arc<AtomicBool>,
}

impl RoundTimer {
    //--- Construction -----------------------------------------------------

    /// Starts a timer ticking once per second.
    pub fn start() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Starts a timer with a custom tick interval.
    ///
    /// The one-second interval is the game's; shorter intervals keep
    /// the tests fast.
    pub(crate) fn with_interval(interval: Duration) -> Self {
        let elapsed = Arc::new(AtomicU64::new(0));
        let stopped = Arc::new(AtomicBool::new(false));

        let thread_elapsed = Arc::clone(&elapsed);
        let thread_stopped = Arc::clone(&stopped);

        thread::spawn(move || {
            let ticker = tick(interval);
            loop {
                if ticker.recv().is_err() {
                    break;
                }
                if thread_stopped.load(Ordering::Relaxed) {
                    break;
                }
                thread_elapsed.fetch_add(1, Ordering::Relaxed);
            }
            debug!("Round timer thread exited");
        });

        Self { elapsed, stopped }
    }

    //--- Queries ----------------------------------------------------------

    /// Seconds elapsed since the timer started.
    ///
    /// Readable from any thread, before and after `stop()`.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// Returns `true` until `stop()` has been called.
    pub fn is_running(&self) -> bool {
        !self.stopped.load(Ordering::Relaxed)
    }

    //--- Shutdown ---------------------------------------------------------

    /// Halts ticking. Idempotent and non-blocking; calling it on an
    /// already-stopped timer is a no-op.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn force_elapsed(&self, secs: u64) {
        self.elapsed.store(secs, Ordering::Relaxed);
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
