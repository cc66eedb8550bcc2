//! Real-time driver for the day clock
//!
//! A `DayTimer` owns one background thread that ticks a shared pizzeria at
//! a fixed cadence until closing time. Each tick holds the pizzeria lock
//! for the whole advance/close/rollover sequence, so balance updates from
//! other threads land either before or after a rollover, never inside it.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use super::game_state::DayReport;
use super::world::{PizzeriaHandle, TickOutcome};

pub struct DayTimer {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<Option<DayReport>>>,
}

impl DayTimer {
    /// Open a new day on the pizzeria and tick it every `period`
    pub fn start(pizzeria: PizzeriaHandle, period: Duration) -> Self {
        pizzeria.lock().start_new_day();

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => match pizzeria.lock().tick() {
                    TickOutcome::Advanced(time) => debug!("tick {}", time),
                    TickOutcome::DayClosed(report) => return Some(report),
                    TickOutcome::Idle => return None,
                },
                // Stop requested, or the timer was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// True once the ticking thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for closing time. Returns `None` if the day was cut short.
    pub fn join(mut self) -> Option<DayReport> {
        self.wait()
    }

    /// Stop ticking now. Returns the report if the day had already closed.
    pub fn stop(mut self) -> Option<DayReport> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The thread may already be gone
            let _ = stop_tx.send(());
        }
        self.wait()
    }

    fn wait(&mut self) -> Option<DayReport> {
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(report) => report,
            Err(_) => {
                warn!("day timer thread panicked");
                None
            }
        }
    }
}

impl Drop for DayTimer {
    fn drop(&mut self) {
        // Dropping the sender disconnects the channel and ends the thread
        self.stop_tx.take();
        self.wait();
    }
}
