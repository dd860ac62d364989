/// Misuse detected while building a process or a simulation.
///
/// The scheduler itself has no failure modes: an empty ready queue is a
/// normal `None` from `dispatch_one`, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("process P{id} needs a run time of at least one quantum")]
    ZeroRunTime { id: usize },
    #[error("process P{id} priority {priority} would underflow over {run_time} quanta")]
    PriorityUnderflow { id: usize, priority: i32, run_time: u32 },
    #[error("maximum run time must be at least one quantum")]
    ZeroMaxRunTime,
    #[error("auto-run step delay must be non-zero")]
    ZeroDelay,
}
