use std::cell::Cell;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Source of wall-clock time used to stamp recorded transactions.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Starts at `start` and moves forward by `step` after every read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<NaiveDateTime>,
    step: TimeDelta,
}

impl SteppingClock {
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}
