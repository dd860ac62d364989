//! Cooperative pacing for automatic runs.
//!
//! A single pending step slot stamped with a generation number. Cancelling
//! bumps the generation, so a step that was queued before the cancel is
//! recognised as stale and dropped when it comes due. Times are millisecond
//! ticks from a free-running `u32` counter and are compared wrapping.

/// Returned by [`StepTimer::start`]; pass it back to cancel that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRunHandle {
    generation: u32,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
pub struct StepTimer {
    delay: u32,
    generation: u32,
    pending: Option<Pending>,
}

impl StepTimer {
    pub const fn new(delay: u32) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Begin a run whose first step is due immediately. Any earlier run is
    /// superseded.
    pub fn start(&mut self, now: u32) -> AutoRunHandle {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(Pending {
            due: now,
            generation: self.generation,
        });
        AutoRunHandle {
            generation: self.generation,
        }
    }

    /// Queue the next step of the current run `delay` after `now`.
    pub fn rearm(&mut self, now: u32) {
        self.pending = Some(Pending {
            due: now.wrapping_add(self.delay),
            generation: self.generation,
        });
    }

    /// Stop the run `handle` belongs to. Returns false if that run had
    /// already been superseded or cancelled.
    pub fn cancel(&mut self, handle: AutoRunHandle) -> bool {
        if handle.generation != self.generation || !self.is_active() {
            return false;
        }
        self.cancel_all();
        true
    }

    /// Stop whatever run is in progress.
    pub fn cancel_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// True while a step of the current run is queued.
    pub fn is_active(&self) -> bool {
        matches!(self.pending, Some(p) if p.generation == self.generation)
    }

    /// Consume the queued step if it is due and still belongs to the current
    /// run. Stale steps are discarded without firing.
    pub fn poll(&mut self, now: u32) -> bool {
        let Some(p) = self.pending else {
            return false;
        };
        if p.generation != self.generation {
            self.pending = None;
            return false;
        }
        if !reached(now, p.due) {
            return false;
        }
        self.pending = None;
        true
    }
}

// `now` is at or past `due`, tolerating counter wrap-around.
fn reached(now: u32, due: u32) -> bool {
    (now.wrapping_sub(due) as i32) >= 0
}
