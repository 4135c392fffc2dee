//! Game simulation on a manual clock
//!
//! Drives a `SequenceEngine` the way a host event loop would: fire scheduled
//! steps by jumping the clock to their deadline, and hand the option buttons
//! to a `Player` whenever the engine is waiting for input.

use std::time::Duration;

use mnemo_core::{EndReason, ResultSummary};
use mnemo_engine::{EngineConfig, Phase, SequenceEngine};
use mnemo_time::{Clock, ManualClock};
use tracing::debug;

use crate::{Player, RecordingHost};

/// Simulation settings
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub engine: EngineConfig,
    /// Feedback display duration (`None` = no feedback display)
    pub feedback: Option<Duration>,
    /// Clock advance before each press
    pub think_time: Duration,
    /// Safety limit on simulation steps per game
    pub max_steps: usize,
}

impl SimulationConfig {
    /// No feedback display, instant presses
    pub fn quick(seed: u64) -> Self {
        SimulationConfig {
            engine: EngineConfig::seeded(seed),
            feedback: None,
            think_time: Duration::ZERO,
            max_steps: 10_000,
        }
    }

    /// Feedback display and human-ish press delays
    pub fn realistic(seed: u64) -> Self {
        SimulationConfig {
            engine: EngineConfig::seeded(seed),
            feedback: Some(Duration::from_millis(600)),
            think_time: Duration::from_millis(400),
            max_steps: 10_000,
        }
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

/// Outcome of one simulated game
#[derive(Clone, Debug)]
pub struct SimulationReport {
    /// Result shown at the end; `None` if the step limit was hit first
    pub result: Option<ResultSummary>,
    pub rounds_started: u64,
    pub presses: u64,
    pub steps: usize,
    /// Highest level reached
    pub max_level: u32,
    /// Game time from start to result
    pub elapsed: Duration,
}

impl SimulationReport {
    pub fn finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn reason(&self) -> Option<EndReason> {
        self.result.as_ref().map(|r| r.reason)
    }
}

pub struct Simulation {
    engine: SequenceEngine<RecordingHost, ManualClock>,
    clock: ManualClock,
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let clock = ManualClock::new();
        let host = match config.feedback {
            Some(duration) => RecordingHost::with_feedback(clock.clone(), duration),
            None => RecordingHost::new(clock.clone()),
        };
        let engine = SequenceEngine::with_clock(config.engine.clone(), host, clock.clone());

        Simulation {
            engine,
            clock,
            config,
        }
    }

    pub fn engine(&self) -> &SequenceEngine<RecordingHost, ManualClock> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SequenceEngine<RecordingHost, ManualClock> {
        &mut self.engine
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn host(&self) -> &RecordingHost {
        self.engine.host()
    }

    /// Jump to the next scheduled step and fire it
    ///
    /// Returns false if nothing was scheduled.
    pub fn advance(&mut self) -> bool {
        match self.engine.next_due() {
            Some(due) => {
                self.clock.set(due);
                self.engine.tick();
                true
            }
            None => false,
        }
    }

    /// Fire scheduled steps until the engine waits for input or goes idle
    pub fn settle(&mut self) {
        while self.engine.phase() != Phase::AwaitingInput && self.advance() {}
    }

    /// Play one game from the start
    pub fn play<P: Player>(&mut self, player: &mut P) -> SimulationReport {
        let started = self.clock.now();
        let games_before = self.engine.stats().games_finished;
        let rounds_before = self.engine.stats().rounds_started;
        let presses_before = self.engine.stats().choices_accepted;

        self.engine.start_game();

        let mut steps = 0;
        let mut max_level = self.engine.state().level;
        while steps < self.config.max_steps && self.engine.stats().games_finished == games_before {
            steps += 1;
            max_level = max_level.max(self.engine.state().level);

            if self.engine.phase() == Phase::AwaitingInput {
                let engine = &self.engine;
                let choice = player.choose(engine.master(), engine.user_sequence(), engine.options());
                match choice {
                    Some(position) => {
                        self.clock.advance(self.config.think_time);
                        self.engine.submit_option(position);
                    }
                    None => {
                        self.engine.show_result(EndReason::Manual);
                    }
                }
            } else if !self.advance() {
                break;
            }
        }

        let stats = self.engine.stats();
        let finished = stats.games_finished > games_before;
        let report = SimulationReport {
            result: finished.then(|| self.engine.last_result().cloned()).flatten(),
            rounds_started: stats.rounds_started - rounds_before,
            presses: stats.choices_accepted - presses_before,
            steps,
            max_level,
            elapsed: self.clock.now() - started,
        };

        debug!(
            steps,
            finished,
            reason = ?report.reason(),
            "simulated game"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorPronePlayer, PerfectPlayer};

    #[test]
    fn test_settle_reaches_input() {
        let mut sim = Simulation::new(SimulationConfig::quick(3));
        sim.engine_mut().start_game();
        sim.settle();

        assert_eq!(sim.engine().phase(), Phase::AwaitingInput);
        assert_eq!(sim.clock().now().as_millis(), 3 * 750);
    }

    #[test]
    fn test_advance_without_schedule() {
        let mut sim = Simulation::new(SimulationConfig::quick(3));
        assert!(!sim.advance());
    }

    #[test]
    fn test_perfect_game_finishes() {
        let mut sim = Simulation::new(SimulationConfig::quick(11));
        let report = sim.play(&mut PerfectPlayer);

        assert!(report.finished());
        assert_eq!(report.reason(), Some(EndReason::Victory));
        assert_eq!(report.max_level, 5);
    }

    #[test]
    fn test_hopeless_player_fails_first_press() {
        let mut sim = Simulation::new(SimulationConfig::quick(11));
        let report = sim.play(&mut ErrorPronePlayer::new(1, 1.0));

        assert_eq!(report.reason(), Some(EndReason::Error));
        assert_eq!(report.presses, 1);
        assert_eq!(report.rounds_started, 1);
    }
}
