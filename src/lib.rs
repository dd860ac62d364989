//! Preemptive priority scheduling simulator.
//!
//! A fixed set of simulated processes is dispatched one quantum at a time.
//! Every dispatch lowers the running process's priority by one, so peers get
//! a chance to overtake it; a process retires once its required run time is
//! used up. The library is `no_std` and heap-free so the same core runs in
//! host tests and in the Cortex-M firmware image (`src/main.rs`).

#![cfg_attr(not(test), no_std)]

pub mod autorun;
pub mod config;
pub mod error;
pub mod process;
pub mod queue;
pub mod rng;
pub mod scheduler;
pub mod sim;
pub mod view;

pub use autorun::{AutoRunHandle, StepTimer};
pub use config::SimConfig;
pub use error::SimError;
pub use process::{Process, ProcessState};
pub use scheduler::Scheduler;
pub use sim::{Simulation, Tick};
pub use view::{Panes, Status};
