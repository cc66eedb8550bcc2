//! Simulated day clock
//!
//! Advances in fixed 15 minute steps from opening to closing time. The
//! clock itself never sleeps; a `DayTimer` (or a test) calls `tick`.

use std::time::Duration;

use log::debug;

use super::types::ClockTime;

pub const OPENING_TIME: ClockTime = ClockTime::new(10, 0);
pub const CLOSING_TIME: ClockTime = ClockTime::new(22, 30);

/// Simulated minutes per tick
pub const MINUTES_PER_TICK: u32 = 15;

/// Real time per tick during normal play
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(15);

/// Lifecycle of the clock within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// No day started yet
    Idle,
    /// Day in progress
    Running,
    /// Closing time reached
    Closed,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Advanced(ClockTime),
    /// This tick reached closing time
    Closed,
    /// Clock was not running; nothing changed
    Stopped,
}

#[derive(Debug, Clone)]
pub struct DayClock {
    time: ClockTime,
    phase: ClockPhase,
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new()
    }
}

impl DayClock {
    pub fn new() -> Self {
        Self {
            time: OPENING_TIME,
            phase: ClockPhase::Idle,
        }
    }

    /// Reset to opening time and start running
    pub fn start_new_day(&mut self) {
        self.time = OPENING_TIME;
        self.phase = ClockPhase::Running;
    }

    /// Advance by one step
    pub fn tick(&mut self) -> ClockTick {
        if self.phase != ClockPhase::Running {
            return ClockTick::Stopped;
        }

        if self.time.minute + MINUTES_PER_TICK >= 60 {
            self.time.minute = 0;
            self.time.hour += 1;
        } else {
            self.time.minute += MINUTES_PER_TICK;
        }
        debug!("clock {}", self.time);

        if self.time == CLOSING_TIME {
            self.phase = ClockPhase::Closed;
            ClockTick::Closed
        } else {
            ClockTick::Advanced(self.time)
        }
    }

    pub fn hour(&self) -> u32 {
        self.time.hour
    }

    pub fn minute(&self) -> u32 {
        self.time.minute
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }
}

/// Number of ticks from opening to closing time
pub fn ticks_per_day() -> u32 {
    let open = OPENING_TIME.hour * 60 + OPENING_TIME.minute;
    let close = CLOSING_TIME.hour * 60 + CLOSING_TIME.minute;
    (close - open) / MINUTES_PER_TICK
}
