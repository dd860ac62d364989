use core::fmt;

use crate::error::SimError;

/// Process states in the priority simulator.
/// Ready: waiting in the ready queue. Done: required run time exhausted,
/// parked in the completed list for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Ready,
    Done,
}

impl ProcessState {
    /// Single-letter code used by the lab printouts (`R` ready, `E` ended).
    pub const fn code(self) -> char {
        match self {
            Self::Ready => 'R',
            Self::Done => 'E',
        }
    }
}

/// A simulated process control block.
/// The id never changes; priority and remaining time decay by one per
/// dispatched quantum. Priority is allowed to go negative since it only
/// orders processes that are still ready. Fields are read through getters
/// so only the scheduler can age a record, and a finished one stays frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    id: usize,
    priority: i32,
    remaining: u32,
    state: ProcessState,
}

impl Process {
    /// Create a ready process. A zero run time would describe a process that
    /// is finished before it ever ran, so it is rejected here. The priority
    /// must also survive `run_time` decrements without leaving `i32`.
    pub const fn new(id: usize, priority: i32, run_time: u32) -> Result<Self, SimError> {
        if run_time == 0 {
            return Err(SimError::ZeroRunTime { id });
        }
        if (priority as i64) - (run_time as i64) < i32::MIN as i64 {
            return Err(SimError::PriorityUnderflow { id, priority, run_time });
        }
        Ok(Self {
            id,
            priority,
            remaining: run_time,
            state: ProcessState::Ready,
        })
    }

    pub const fn id(&self) -> usize {
        self.id
    }

    pub const fn priority(&self) -> i32 {
        self.priority
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn state(&self) -> ProcessState {
        self.state
    }

    pub const fn is_done(&self) -> bool {
        matches!(self.state, ProcessState::Done)
    }

    /// Consume one quantum: age the priority and burn one unit of run time.
    /// Returns true if the process just completed.
    pub(crate) fn run_quantum(&mut self) -> bool {
        debug_assert!(!self.is_done(), "dispatched a finished process");
        self.priority -= 1;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.state = ProcessState::Done;
            return true;
        }
        false
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{} priority={} remaining={} state={}",
            self.id,
            self.priority,
            self.remaining,
            self.state.code()
        )
    }
}
