//! One self-contained simulation: the scheduler plus everything needed to
//! seed it, reset it and pace an automatic run. Callers own the value and
//! pass it around; nothing here is global.

use crate::autorun::{AutoRunHandle, StepTimer};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::process::Process;
use crate::rng::Rng;
use crate::scheduler::Scheduler;
use log::info;

/// Outcome of [`Simulation::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No automatic run in progress.
    Idle,
    /// A step is queued but not yet due.
    Waiting,
    Dispatched(Process),
    /// The due step found the ready queue empty; the run is over.
    Finished,
}

pub struct Simulation<const N: usize> {
    config: SimConfig,
    rng: Rng,
    scheduler: Scheduler<N>,
    timer: StepTimer,
    quanta: u32,
}

impl<const N: usize> Simulation<N> {
    /// Validate `config` and populate the ready queue with `N` fresh
    /// processes named P1..PN.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut sim = Self {
            config,
            rng: Rng::new(config.seed),
            scheduler: Scheduler::new(),
            timer: StepTimer::new(config.step_delay_ms),
            quanta: 0,
        };
        sim.populate()?;
        Ok(sim)
    }

    // Priorities are a shuffled 1..=N so they start distinct.
    fn populate(&mut self) -> Result<(), SimError> {
        let mut priorities = [0i32; N];
        for (i, prio) in priorities.iter_mut().enumerate() {
            *prio = i as i32 + 1;
        }
        self.rng.shuffle(&mut priorities);

        for (i, &priority) in priorities.iter().enumerate() {
            let run_time = self.rng.range_inclusive(1, self.config.max_run_time);
            let process = Process::new(i + 1, priority, run_time)?;
            info!("created {}", process);
            self.scheduler.insert(process);
        }
        Ok(())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the ready queue and completed list.
    pub fn scheduler(&self) -> &Scheduler<N> {
        &self.scheduler
    }

    /// Quanta dispatched since the last reset.
    pub fn quanta(&self) -> u32 {
        self.quanta
    }

    pub fn is_finished(&self) -> bool {
        self.scheduler.is_finished()
    }

    /// Dispatch a single quantum.
    pub fn step(&mut self) -> Option<Process> {
        let event = self.scheduler.dispatch_one()?;
        self.quanta += 1;
        Some(event)
    }

    /// Dispatch until nothing is ready, reporting every quantum.
    pub fn run_to_completion<F>(&mut self, mut on_event: F)
    where
        F: FnMut(&Process),
    {
        while let Some(event) = self.step() {
            on_event(&event);
        }
    }

    /// Begin an automatic run at time `now`. The first step is due at once,
    /// later ones `step_delay_ms` after the previous one.
    pub fn start_auto(&mut self, now: u32) -> AutoRunHandle {
        info!("auto-run started at {}ms", now);
        self.timer.start(now)
    }

    /// Cancel the run `handle` refers to. No further step of that run fires,
    /// even one that was already queued.
    pub fn cancel_auto(&mut self, handle: AutoRunHandle) -> bool {
        let cancelled = self.timer.cancel(handle);
        if cancelled {
            info!("auto-run cancelled");
        }
        cancelled
    }

    pub fn is_auto_running(&self) -> bool {
        self.timer.is_active()
    }

    /// Drive the automatic run. Call as often as convenient; a dispatch only
    /// happens when a step of the live run is due.
    pub fn poll<F>(&mut self, now: u32, mut on_event: F) -> Tick
    where
        F: FnMut(&Process),
    {
        if !self.timer.poll(now) {
            return if self.timer.is_active() {
                Tick::Waiting
            } else {
                Tick::Idle
            };
        }
        match self.step() {
            Some(event) => {
                on_event(&event);
                self.timer.rearm(now);
                Tick::Dispatched(event)
            }
            None => {
                info!("auto-run finished after {} quanta", self.quanta);
                Tick::Finished
            }
        }
    }

    /// Throw away all state and start over with a fresh process set. Any
    /// automatic run is cancelled first.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.timer.cancel_all();
        self.scheduler.clear();
        self.quanta = 0;
        info!("simulation reset");
        self.populate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation<5> {
        Simulation::new(SimConfig::DEFAULT.with_step_delay_ms(100)).unwrap()
    }

    #[test]
    fn fresh_sim_has_distinct_priorities() {
        let s = sim();
        let mut prios: Vec<i32> = s.scheduler().ready().map(Process::priority).collect();
        prios.sort_unstable();
        assert_eq!(prios, [1, 2, 3, 4, 5]);
        assert!(s.scheduler().ready().all(|p| (1..=6).contains(&p.remaining())));
        assert_eq!(s.scheduler().completed_len(), 0);
    }

    #[test]
    fn names_are_p1_to_pn() {
        let s = sim();
        let mut ids: Vec<usize> = s.scheduler().ready().map(Process::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn keeps_config_and_honours_run_time_bound() {
        let s = Simulation::<5>::new(SimConfig::DEFAULT.with_max_run_time(2)).unwrap();
        assert_eq!(s.config().max_run_time, 2);
        assert!(s.scheduler().ready().all(|p| (1..=2).contains(&p.remaining())));
    }

    #[test]
    fn rejects_bad_config() {
        let err = Simulation::<3>::new(SimConfig::DEFAULT.with_max_run_time(0)).err();
        assert_eq!(err, Some(SimError::ZeroMaxRunTime));
    }

    #[test]
    fn poll_paces_dispatches() {
        let mut s = sim();
        assert_eq!(s.poll(0, |_| {}), Tick::Idle);
        s.start_auto(0);
        assert!(matches!(s.poll(0, |_| {}), Tick::Dispatched(_)));
        assert_eq!(s.poll(99, |_| {}), Tick::Waiting);
        assert!(matches!(s.poll(100, |_| {}), Tick::Dispatched(_)));
        assert_eq!(s.quanta(), 2);
    }

    #[test]
    fn auto_run_finishes() {
        let mut s = sim();
        let expected: u32 = s.scheduler().ready().map(Process::remaining).sum();
        s.start_auto(0);
        let mut now = 0;
        let mut events = 0;
        loop {
            match s.poll(now, |_| events += 1) {
                Tick::Finished => break,
                Tick::Idle => panic!("run stopped early"),
                _ => now += 10,
            }
        }
        assert_eq!(events, expected);
        assert!(s.is_finished());
        assert!(!s.is_auto_running());
        assert_eq!(s.poll(now + 1000, |_| {}), Tick::Idle);
    }

    #[test]
    fn reset_cancels_queued_step() {
        let mut s = sim();
        s.start_auto(0);
        s.poll(0, |_| {});
        assert!(s.is_auto_running());
        s.reset().unwrap();
        assert_eq!(s.poll(100, |_| panic!("fired after reset")), Tick::Idle);
        assert_eq!(s.quanta(), 0);
        assert_eq!(s.scheduler().ready_len(), 5);
        assert_eq!(s.scheduler().completed_len(), 0);
    }
}
