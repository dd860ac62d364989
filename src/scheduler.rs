/// Quantum-based preemptive priority scheduler.
///
/// Each dispatch: take the head of the ready queue, run it for one quantum
/// (priority and remaining time both drop by one), then either retire it to
/// the completed list or put it back in priority order. Equal priorities are
/// served FIFO, so a re-inserted process lands behind its peers.
use crate::process::Process;
use crate::queue::FixedList;
use log::{debug, info};

pub struct Scheduler<const N: usize> {
    ready: FixedList<N>,
    completed: FixedList<N>,
}

impl<const N: usize> Scheduler<N> {
    pub const fn new() -> Self {
        Self {
            ready: FixedList::new(),
            completed: FixedList::new(),
        }
    }

    /// Build a scheduler with every process inserted in iteration order.
    pub fn from_processes<I>(processes: I) -> Self
    where
        I: IntoIterator<Item = Process>,
    {
        let mut sched = Self::new();
        for p in processes {
            sched.insert(p);
        }
        sched
    }

    /// Insert keeping the ready queue sorted by priority, highest first.
    /// The process goes after every entry whose priority is >= its own.
    ///
    /// `N` is the total process budget: ready plus completed entries count
    /// against it, and a completed process keeps its slot until `clear`.
    ///
    /// # Panics
    /// If `process` is already finished, or if the scheduler already holds
    /// `N` processes.
    pub fn insert(&mut self, process: Process) {
        assert!(!process.is_done(), "P{} is already done", process.id());
        assert!(self.total() < N, "scheduler holds at most {} processes", N);
        let pos = self
            .ready
            .iter()
            .position(|q| q.priority() < process.priority())
            .unwrap_or(self.ready.len());
        self.ready.insert(pos, process);
    }

    /// Run the highest-priority ready process for one quantum.
    ///
    /// Returns the process as it is after the quantum, or `None` once the
    /// ready queue is empty (the simulation is over).
    pub fn dispatch_one(&mut self) -> Option<Process> {
        let mut process = self.ready.pop_front()?;
        let finished = process.run_quantum();
        debug!("dispatched {}", process);
        if finished {
            info!("P{} completed", process.id());
            self.completed.push_back(process);
        } else {
            self.insert(process);
        }
        Some(process)
    }

    /// Dispatch until the ready queue drains, reporting every quantum.
    pub fn run_to_completion<F>(&mut self, mut on_event: F)
    where
        F: FnMut(&Process),
    {
        while let Some(process) = self.dispatch_one() {
            on_event(&process);
        }
    }

    /// Ready processes in dispatch order.
    pub fn ready(&self) -> impl Iterator<Item = &Process> + '_ {
        self.ready.iter()
    }

    /// Finished processes in completion order.
    pub fn completed(&self) -> impl Iterator<Item = &Process> + '_ {
        self.completed.iter()
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// Processes owned by this scheduler, ready or done.
    pub fn total(&self) -> usize {
        self.ready.len() + self.completed.len()
    }

    pub fn is_finished(&self) -> bool {
        self.ready.is_empty()
    }

    /// Drop every process, ready and completed.
    pub fn clear(&mut self) {
        self.ready.clear();
        self.completed.clear();
    }
}

impl<const N: usize> Default for Scheduler<N> {
    fn default() -> Self {
        Self::new()
    }
}
