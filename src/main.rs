//! Priority scheduling simulator — bare-metal console front end.
//!
//! Runs on ARM Cortex-M4 (STM32F411) under QEMU. Seeds five processes, shows
//! the ready and completed panes over semihosting, single-steps a couple of
//! quanta, starts an automatic run, resets it halfway through, then lets a
//! second automatic run go to completion. SysTick provides the millisecond
//! clock that paces automatic steps.

#![no_std]
#![no_main]

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::entry;
use cortex_m_semihosting::{debug, hprintln};
use log::{LevelFilter, Log, Metadata, Record};
use panic_halt as _;

use prio_sched::{Panes, SimConfig, Simulation, Status, Tick};

const NUM_PROCESSES: usize = 5;
// HSI clock after reset; QEMU keeps it.
const SYSCLK_HZ: u32 = 16_000_000;
// Quanta the first automatic run gets before the reset interrupts it.
const STEPS_BEFORE_RESET: u32 = 3;

struct SemihostingLogger;

impl Log for SemihostingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let _ = hprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: SemihostingLogger = SemihostingLogger;

/// Millisecond clock driven by SysTick wrap events. Polled, no interrupt.
struct Clock {
    syst: SYST,
    ms: u32,
}

impl Clock {
    fn new(mut syst: SYST) -> Self {
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(SYSCLK_HZ / 1000 - 1);
        syst.clear_current();
        syst.enable_counter();
        Self { syst, ms: 0 }
    }

    fn now(&mut self) -> u32 {
        if self.syst.has_wrapped() {
            self.ms = self.ms.wrapping_add(1);
        }
        self.ms
    }
}

fn render(sim: &Simulation<NUM_PROCESSES>, status: Status) {
    let _ = hprintln!("{}", Panes(sim.scheduler()));
    let _ = hprintln!("{}\n", status);
}

fn fail(msg: &dyn core::fmt::Display) -> ! {
    let _ = hprintln!("fatal: {}", msg);
    debug::exit(debug::EXIT_FAILURE);
    loop {}
}

#[entry]
fn main() -> ! {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    let _ = hprintln!("========================================");
    let _ = hprintln!("  Priority Scheduler — Cortex-M4 Demo");
    let _ = hprintln!("========================================\n");

    let Some(cp) = cortex_m::Peripherals::take() else {
        fail(&"core peripherals already taken");
    };
    let mut clock = Clock::new(cp.SYST);

    let config = SimConfig::DEFAULT.with_step_delay_ms(250);
    let mut sim = match Simulation::<NUM_PROCESSES>::new(config) {
        Ok(sim) => sim,
        Err(e) => fail(&e),
    };
    let _ = hprintln!(
        "{} processes, run times 1..={}, auto step every {}ms\n",
        NUM_PROCESSES,
        sim.config().max_run_time,
        sim.config().step_delay_ms
    );
    render(&sim, Status::Blank);

    // Manual single steps.
    for _ in 0..2 {
        let status = Status::from(sim.step());
        render(&sim, status);
    }

    // Automatic run, interrupted by a reset.
    let handle = sim.start_auto(clock.now());
    render(&sim, Status::AutoStarted);
    let mut steps = 0;
    while steps < STEPS_BEFORE_RESET {
        match sim.poll(clock.now(), |_| {}) {
            Tick::Dispatched(p) => {
                render(&sim, Status::Dispatched(p));
                steps += 1;
            }
            Tick::Finished | Tick::Idle => break,
            Tick::Waiting => {}
        }
    }
    if let Err(e) = sim.reset() {
        fail(&e);
    }
    // The reset already cancelled the run; this handle is stale now.
    let _ = sim.cancel_auto(handle);
    render(&sim, Status::Reset);

    // Fresh automatic run to completion.
    sim.start_auto(clock.now());
    render(&sim, Status::AutoStarted);
    loop {
        match sim.poll(clock.now(), |_| {}) {
            Tick::Dispatched(p) => render(&sim, Status::Dispatched(p)),
            Tick::Finished => {
                render(&sim, Status::AllDone);
                break;
            }
            Tick::Idle => fail(&"automatic run stopped before completion"),
            Tick::Waiting => {}
        }
    }

    let _ = hprintln!("{} quanta dispatched. Halting.", sim.quanta());
    debug::exit(debug::EXIT_SUCCESS);

    loop {}
}
