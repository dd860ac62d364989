//! Plain-text rendering of simulation state for a console front end.

use core::fmt;

use crate::process::Process;
use crate::scheduler::Scheduler;

/// The two panes: pending processes on one side, finished on the other.
pub struct Panes<'a, const N: usize>(pub &'a Scheduler<N>);

impl<const N: usize> fmt::Display for Panes<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- ready queue --")?;
        if self.0.is_finished() {
            writeln!(f, "ready queue empty")?;
        }
        for p in self.0.ready() {
            writeln!(f, "{}", p)?;
        }

        writeln!(f, "-- completed --")?;
        if self.0.completed_len() == 0 {
            writeln!(f, "no completed processes")?;
        }
        for p in self.0.completed() {
            writeln!(f, "P{} state={}", p.id(), p.state().code())?;
        }
        Ok(())
    }
}

/// One-line status shown under the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Blank,
    AutoStarted,
    Reset,
    /// Figures are the process's values after the quantum it just ran.
    Dispatched(Process),
    AllDone,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::AutoStarted => f.write_str("auto-run started"),
            Self::Reset => f.write_str("reset"),
            Self::Dispatched(p) => write!(
                f,
                "dispatched P{} (priority={}, remaining={})",
                p.id(),
                p.priority(),
                p.remaining()
            ),
            Self::AllDone => f.write_str("all processes completed"),
        }
    }
}

impl From<Option<Process>> for Status {
    fn from(event: Option<Process>) -> Self {
        event.map_or(Self::AllDone, Self::Dispatched)
    }
}
