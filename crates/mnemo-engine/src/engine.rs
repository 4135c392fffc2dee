//! Sequence Engine - owns the game state and the turn lifecycle
//!
//! One round:
//! 1. Generate the master sequence for the current level
//! 2. Reveal it item by item (timed steps)
//! 3. Show the option buttons and collect choices
//! 4. Verify each choice against the master at the same index
//! 5. On a full match advance (or win); on a mismatch end the game
//!
//! Timed steps sit in a single `TimerSlot`, so starting a round or resetting
//! cancels any reveal or feedback step still pending from before.

use std::time::Duration;

use mnemo_core::{
    EndReason, GameState, GameTime, LevelConfig, LevelTable, MnemoResult, ResultSummary,
    ScoreTier, Symbol,
};
use mnemo_time::{Clock, SystemClock, TimerSlot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::{
    build_option_pool, generate_sequence, validate_sequence, EngineConfig, Feedback, Host, Phase,
    PresentationDriver, RevealStep, Screen, ScoreInput, ScoringPolicy,
};

/// Scheduled engine step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Move the reveal to the next item
    Reveal,
    /// Feedback finished playing
    FeedbackDone { success: bool },
}

/// What happened to a submitted choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Dropped: input locked or no round awaiting input
    Ignored,
    /// Matches so far; the round continues
    Accepted { index: usize },
    /// Final choice of a fully matched sequence
    RoundComplete,
    /// Did not match the master sequence at `index`
    Mismatch { index: usize },
}

#[derive(Clone, Debug, Default)]
pub struct EngineStats {
    pub rounds_started: u64,
    pub rounds_won: u64,
    pub choices_accepted: u64,
    pub choices_dropped: u64,
    pub levels_advanced: u64,
    pub games_finished: u64,
}

/// The sequence memory game
pub struct SequenceEngine<H: Host, C: Clock = SystemClock> {
    host: H,
    clock: C,
    levels: LevelTable,
    scoring: Box<dyn ScoringPolicy>,
    rng: StdRng,
    state: GameState,
    master: Vec<Symbol>,
    user: Vec<Symbol>,
    options: Vec<Symbol>,
    driver: PresentationDriver,
    timer: TimerSlot<Step>,
    last_result: Option<ResultSummary>,
    stats: EngineStats,
}

impl<H: Host> SequenceEngine<H, SystemClock> {
    /// Create an engine on the system clock
    pub fn new(config: EngineConfig, host: H) -> Self {
        Self::with_clock(config, host, SystemClock::new())
    }
}

impl<H: Host, C: Clock> SequenceEngine<H, C> {
    pub fn with_clock(config: EngineConfig, host: H, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        SequenceEngine {
            host,
            clock,
            levels: config.levels,
            scoring: config.scoring.policy(),
            rng,
            state: GameState::new(),
            master: Vec::new(),
            user: Vec::new(),
            options: Vec::new(),
            driver: PresentationDriver::new(config.reveal),
            timer: TimerSlot::new(),
            last_result: None,
            stats: EngineStats::default(),
        }
    }

    /// Swap the scoring formula
    pub fn set_scoring(&mut self, policy: Box<dyn ScoringPolicy>) {
        self.scoring = policy;
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Start a fresh game from level 1
    pub fn start_game(&mut self) {
        self.clear_game();
        info!(levels = self.levels.max_level(), "game started");
        self.host.switch_screen(Screen::Game);
        let progress = self.state.progress(self.levels.get(self.state.level));
        self.host.update_progress(progress);
        self.start_round();
    }

    /// Abandon the current game without showing a result
    pub fn reset_game(&mut self) {
        self.clear_game();
        debug!("game reset");
    }

    /// End the game now and show the result
    pub fn show_result(&mut self, reason: EndReason) -> ResultSummary {
        self.end_game(reason)
    }

    /// Start a round at the current level with a freshly drawn sequence
    pub fn start_round(&mut self) {
        let config = self.levels.get(self.state.level);
        let master = generate_sequence(&mut self.rng, config);
        self.begin_round(master);
    }

    /// Start a round with a caller-chosen master sequence
    pub fn start_round_with(&mut self, master: Vec<Symbol>) -> MnemoResult<()> {
        validate_sequence(&master, self.levels.get(self.state.level))?;
        self.begin_round(master);
        Ok(())
    }

    /// Submit one choice
    pub fn submit_choice(&mut self, symbol: Symbol) -> ChoiceOutcome {
        if self.state.locked || !self.driver.accepts_input() {
            trace!(phase = ?self.driver.phase(), "choice dropped");
            self.stats.choices_dropped += 1;
            return ChoiceOutcome::Ignored;
        }

        self.host.play_click();
        self.stats.choices_accepted += 1;

        self.user.push(symbol);
        let index = self.user.len() - 1;

        if self.master.get(index) != self.user.get(index) {
            debug!(index, "choice mismatch");
            self.fail_round();
            return ChoiceOutcome::Mismatch { index };
        }

        if self.user.len() == self.master.len() {
            self.complete_round();
            return ChoiceOutcome::RoundComplete;
        }

        ChoiceOutcome::Accepted { index }
    }

    /// Submit the option shown at a display position
    pub fn submit_option(&mut self, position: usize) -> ChoiceOutcome {
        match self.options.get(position).cloned() {
            Some(symbol) => self.submit_choice(symbol),
            None => {
                self.stats.choices_dropped += 1;
                ChoiceOutcome::Ignored
            }
        }
    }

    /// Fire every scheduled step that is due
    ///
    /// Returns the number of steps fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(step) = self.timer.poll(now) {
            fired += 1;
            self.run_step(step);
        }
        fired
    }

    /// End the game: score it, show the result, reset the state
    pub fn end_game(&mut self, reason: EndReason) -> ResultSummary {
        let now = self.clock.now();
        let elapsed = self
            .state
            .started_at
            .map(|started| now - started)
            .unwrap_or(Duration::ZERO);

        let input = ScoreInput {
            correct: self.state.correct_sequences,
            errors: self.state.errors,
            level: self.state.level,
            elapsed,
        };
        let score = self.scoring.score(&input);

        let summary = ResultSummary {
            reason,
            score,
            correct_sequences: input.correct,
            errors: input.errors,
            accuracy: input.accuracy(),
            elapsed_secs: input.elapsed_secs(),
            level: input.level,
            tier: ScoreTier::from_score(score),
        };

        info!(
            reason = %reason,
            score,
            policy = self.scoring.name(),
            correct = summary.correct_sequences,
            errors = summary.errors,
            elapsed_secs = summary.elapsed_secs,
            "game finished"
        );

        self.host.game_ended(reason);
        self.host.switch_screen(Screen::Result);
        self.host.show_result(&summary);

        self.clear_game();
        self.stats.games_finished += 1;
        self.last_result = Some(summary.clone());
        summary
    }

    // ------------------------------------------------------------------
    // Round lifecycle
    // ------------------------------------------------------------------

    fn begin_round(&mut self, master: Vec<Symbol>) {
        let now = self.clock.now();
        self.state.mark_started(now);
        self.state.locked = false;
        self.user.clear();
        self.options.clear();
        self.master = master;
        self.stats.rounds_started += 1;

        debug!(
            level = self.state.level,
            length = self.master.len(),
            "round started"
        );

        match self
            .driver
            .begin_reveal(&mut self.host, &self.master, self.state.level)
        {
            RevealStep::Next(delay) => {
                self.timer.schedule(now, delay, Step::Reveal);
            }
            RevealStep::Finished => self.present_options(),
        }
    }

    fn run_step(&mut self, step: Step) {
        match step {
            Step::Reveal => match self.driver.advance_reveal(&mut self.host, &self.master) {
                RevealStep::Next(delay) => {
                    let now = self.clock.now();
                    self.timer.schedule(now, delay, Step::Reveal);
                }
                RevealStep::Finished => self.present_options(),
            },
            Step::FeedbackDone { success } => self.finish_feedback(success),
        }
    }

    fn present_options(&mut self) {
        let config = self.levels.get(self.state.level);
        self.options = build_option_pool(&mut self.rng, &self.master, config);
        self.driver.await_input(&mut self.host, &self.options);
        trace!(options = self.options.len(), "awaiting input");
    }

    fn fail_round(&mut self) {
        self.state.record_error();
        self.resolve_with_feedback(false);
    }

    fn complete_round(&mut self) {
        self.state.record_success();
        self.stats.rounds_won += 1;
        debug!(
            level = self.state.level,
            successes = self.state.successes_in_level,
            "round won"
        );
        self.resolve_with_feedback(true);
    }

    fn resolve_with_feedback(&mut self, success: bool) {
        self.state.locked = true;
        self.driver.resolve();

        match self.host.show_feedback(success) {
            Feedback::Timed(duration) => {
                let now = self.clock.now();
                self.timer
                    .schedule(now, duration, Step::FeedbackDone { success });
            }
            Feedback::Unavailable => self.finish_feedback(success),
        }
    }

    fn finish_feedback(&mut self, success: bool) {
        self.state.locked = false;

        if !success {
            self.end_game(EndReason::Error);
            return;
        }

        let level = self.state.level;
        if self.state.level_complete(self.levels.get(level)) {
            if self.levels.is_final(level) {
                self.end_game(EndReason::Victory);
                return;
            }
            self.state.advance_level();
            self.stats.levels_advanced += 1;
            info!(level = self.state.level, "level advanced");
        }

        let progress = self.state.progress(self.levels.get(self.state.level));
        self.host.update_progress(progress);
        self.start_round();
    }

    fn clear_game(&mut self) {
        self.timer.cancel();
        self.driver.reset(&mut self.host);
        self.state.reset();
        self.master.clear();
        self.user.clear();
        self.options.clear();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    pub fn master(&self) -> &[Symbol] {
        &self.master
    }

    pub fn user_sequence(&self) -> &[Symbol] {
        &self.user
    }

    pub fn options(&self) -> &[Symbol] {
        &self.options
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Configuration of the level being played
    pub fn level_config(&self) -> &LevelConfig {
        self.levels.get(self.state.level)
    }

    pub fn scoring(&self) -> &dyn ScoringPolicy {
        self.scoring.as_ref()
    }

    /// When the next scheduled step is due
    pub fn next_due(&self) -> Option<GameTime> {
        self.timer.due()
    }

    pub fn pending_step(&self) -> Option<Step> {
        self.timer.peek().copied()
    }

    pub fn last_result(&self) -> Option<&ResultSummary> {
        self.last_result.as_ref()
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingHost};
    use crate::{NullHost, ScoreBounds, ScoringKind};
    use mnemo_core::{palette, LevelProgress};
    use mnemo_time::ManualClock;

    type TestEngine = SequenceEngine<RecordingHost, ManualClock>;

    fn engine_with(host: RecordingHost, scoring: ScoringKind) -> (TestEngine, ManualClock) {
        let clock = ManualClock::new();
        let config = EngineConfig::seeded(42).with_scoring(scoring);
        (SequenceEngine::with_clock(config, host, clock.clone()), clock)
    }

    /// Advance the clock through the whole reveal
    fn finish_reveal<H: Host>(engine: &mut SequenceEngine<H, ManualClock>, clock: &ManualClock) {
        while engine.pending_step() == Some(Step::Reveal) {
            let due = engine.next_due().unwrap();
            clock.set(due);
            engine.tick();
        }
    }

    fn fruits(symbols: &[&str]) -> Vec<Symbol> {
        palette(symbols)
    }

    #[test]
    fn test_start_round_generates_level_sequence() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();

        let config = engine.level_config().clone();
        assert_eq!(engine.master().len(), config.sequence_length);
        assert!(engine.master().iter().all(|s| config.contains(s)));
        assert_eq!(engine.phase(), Phase::Revealing { index: 0 });
        assert_eq!(engine.state().started_at, Some(clock.now()));
        assert!(engine.user_sequence().is_empty());
    }

    #[test]
    fn test_choices_dropped_during_reveal() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();

        let first = engine.master()[0].clone();
        assert_eq!(engine.submit_choice(first), ChoiceOutcome::Ignored);
        assert!(engine.user_sequence().is_empty());
        assert_eq!(engine.stats().choices_dropped, 1);

        finish_reveal(&mut engine, &clock);
        assert_eq!(engine.phase(), Phase::AwaitingInput);
        assert!(engine.host().last_options().is_some());
    }

    #[test]
    fn test_reveal_timing_follows_level() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();

        let start = clock.now();
        assert_eq!(engine.next_due(), Some(start + Duration::from_millis(750)));

        // Nothing fires early
        clock.advance(Duration::from_millis(749));
        assert_eq!(engine.tick(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(engine.tick(), 1);
        assert_eq!(engine.phase(), Phase::Revealing { index: 1 });
    }

    #[test]
    fn test_full_match_is_success() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();
        engine
            .start_round_with(fruits(&["🍎", "🍌", "🍇"]))
            .unwrap();
        finish_reveal(&mut engine, &clock);

        assert_eq!(
            engine.submit_choice(fruits(&["🍎"])[0].clone()),
            ChoiceOutcome::Accepted { index: 0 }
        );
        assert!(!engine.state().locked);
        assert_eq!(
            engine.submit_choice(fruits(&["🍌"])[0].clone()),
            ChoiceOutcome::Accepted { index: 1 }
        );
        assert!(!engine.state().locked);

        // No feedback display: the next round starts straight away
        assert_eq!(
            engine.submit_choice(fruits(&["🍇"])[0].clone()),
            ChoiceOutcome::RoundComplete
        );
        assert_eq!(engine.state().successes_in_level, 1);
        assert_eq!(engine.state().correct_sequences, 1);
        assert_eq!(engine.state().level, 1);
        assert_eq!(engine.phase(), Phase::Revealing { index: 0 });
        assert_eq!(engine.host().count(&Call::Click), 3);
        assert!(engine.host().calls.contains(&Call::Progress(LevelProgress {
            level: 1,
            successes: 1,
            required: 2
        })));
    }

    #[test]
    fn test_mismatch_ends_game_with_error() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();
        engine
            .start_round_with(fruits(&["🍎", "🍌", "🍇"]))
            .unwrap();
        finish_reveal(&mut engine, &clock);

        engine.submit_choice(fruits(&["🍎"])[0].clone());
        assert_eq!(
            engine.submit_choice(fruits(&["🍇"])[0].clone()),
            ChoiceOutcome::Mismatch { index: 1 }
        );

        let host = engine.host();
        assert!(host.calls.contains(&Call::Feedback(false)));
        assert!(host.calls.contains(&Call::Ended(EndReason::Error)));
        assert!(host.calls.contains(&Call::Screen(Screen::Result)));

        let result = engine.last_result().unwrap();
        assert_eq!(result.reason, EndReason::Error);
        assert_eq!(result.errors, 1);
        assert_eq!(result.correct_sequences, 0);

        // State was reset after showing the result
        assert_eq!(engine.state(), &GameState::new());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_mismatch_after_correct_rounds_still_fails() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();

        // Win one round by replaying the master
        finish_reveal(&mut engine, &clock);
        for symbol in engine.master().to_vec() {
            engine.submit_choice(symbol);
        }
        assert_eq!(engine.state().correct_sequences, 1);

        finish_reveal(&mut engine, &clock);
        let wrong = engine
            .level_config()
            .palette
            .iter()
            .find(|s| **s != engine.master()[0])
            .cloned()
            .unwrap();
        assert_eq!(
            engine.submit_choice(wrong),
            ChoiceOutcome::Mismatch { index: 0 }
        );
        assert_eq!(engine.last_result().unwrap().correct_sequences, 1);
    }

    #[test]
    fn test_timed_feedback_locks_input() {
        let host = RecordingHost::with_feedback(Duration::from_millis(600));
        let (mut engine, clock) = engine_with(host, ScoringKind::Weighted);
        engine.start_game();
        engine
            .start_round_with(fruits(&["🍎", "🍎", "🍌"]))
            .unwrap();
        finish_reveal(&mut engine, &clock);

        for s in fruits(&["🍎", "🍎", "🍌"]) {
            engine.submit_choice(s);
        }
        assert!(engine.state().locked);
        assert_eq!(engine.phase(), Phase::Resolved);
        assert_eq!(
            engine.pending_step(),
            Some(Step::FeedbackDone { success: true })
        );

        // Clicks during feedback are dropped
        assert_eq!(
            engine.submit_choice(fruits(&["🍎"])[0].clone()),
            ChoiceOutcome::Ignored
        );

        clock.advance(Duration::from_millis(600));
        engine.tick();
        assert!(!engine.state().locked);
        assert_eq!(engine.phase(), Phase::Revealing { index: 0 });
    }

    #[test]
    fn test_level_advance_after_required_successes() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();

        for _ in 0..2 {
            finish_reveal(&mut engine, &clock);
            for symbol in engine.master().to_vec() {
                engine.submit_choice(symbol);
            }
        }

        assert_eq!(engine.state().level, 2);
        assert_eq!(engine.state().successes_in_level, 0);
        assert_eq!(engine.state().correct_sequences, 2);
        assert_eq!(engine.master().len(), 4);
        assert_eq!(engine.stats().levels_advanced, 1);
    }

    #[test]
    fn test_victory_at_final_level() {
        let levels = LevelTable::new(vec![LevelConfig::new(
            1,
            palette(&["🍎", "🍌"]),
            2,
            2,
            1,
        )])
        .unwrap();
        let clock = ManualClock::new();
        let config = EngineConfig::seeded(1).with_levels(levels);
        let mut engine =
            SequenceEngine::with_clock(config, RecordingHost::default(), clock.clone());

        engine.start_game();
        finish_reveal(&mut engine, &clock);
        for symbol in engine.master().to_vec() {
            engine.submit_choice(symbol);
        }

        let result = engine.last_result().unwrap();
        assert_eq!(result.reason, EndReason::Victory);
        assert_eq!(result.correct_sequences, 1);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_zero_attempts_weighted_floor() {
        let (mut engine, _clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        let summary = engine.show_result(EndReason::Manual);

        assert_eq!(summary.score, 70);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.elapsed_secs, 0);
        assert_eq!(summary.tier, ScoreTier::Low);
        assert_eq!(engine.host().results().len(), 1);
    }

    #[test]
    fn test_linear_quit_in_first_round() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Linear);
        engine.start_game();
        clock.advance(Duration::from_secs(10));
        let summary = engine.show_result(EndReason::Manual);

        // 0*10 + 1*5 + (100 - 10)
        assert_eq!(summary.correct_sequences + summary.errors, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.score, 95);
    }

    /// Flat score, clamped to custom bounds
    struct FlatScoring {
        bounds: ScoreBounds,
        value: f64,
    }

    impl ScoringPolicy for FlatScoring {
        fn name(&self) -> &'static str {
            "flat"
        }

        fn bounds(&self) -> ScoreBounds {
            self.bounds
        }

        fn raw(&self, _input: &ScoreInput) -> f64 {
            self.value
        }
    }

    #[test]
    fn test_custom_scoring_policy() {
        let (mut engine, _clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.set_scoring(Box::new(FlatScoring {
            bounds: ScoreBounds::new(10, 20).unwrap(),
            value: 1000.0,
        }));
        assert_eq!(engine.scoring().name(), "flat");

        engine.start_game();
        let summary = engine.show_result(EndReason::Manual);
        assert_eq!(summary.score, 20);
        assert_eq!(engine.host().results()[0].score, 20);
    }

    #[test]
    fn test_elapsed_time_feeds_score() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Linear);
        engine.start_game();
        finish_reveal(&mut engine, &clock);
        for symbol in engine.master().to_vec() {
            engine.submit_choice(symbol);
        }

        let started = engine.state().started_at.unwrap();
        clock.set(started + Duration::from_secs(30));
        let summary = engine.show_result(EndReason::Manual);

        // 1*10 + 1*5 + (100 - 30)
        assert_eq!(summary.elapsed_secs, 30);
        assert_eq!(summary.score, 85);
        assert_eq!(summary.tier, ScoreTier::Medium);
    }

    #[test]
    fn test_reset_cancels_pending_reveal() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();
        assert!(engine.next_due().is_some());

        engine.reset_game();
        assert_eq!(engine.next_due(), None);
        assert_eq!(engine.phase(), Phase::Idle);

        clock.advance(Duration::from_secs(10));
        assert_eq!(engine.tick(), 0);
        assert!(engine.master().is_empty());
    }

    #[test]
    fn test_new_game_mid_animation_supersedes_old_round() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();
        clock.advance(Duration::from_millis(750));
        engine.tick();
        assert_eq!(engine.phase(), Phase::Revealing { index: 1 });

        engine.start_game();
        assert_eq!(engine.phase(), Phase::Revealing { index: 0 });
        assert_eq!(engine.stats().rounds_started, 2);
    }

    #[test]
    fn test_start_round_with_rejects_foreign_sequence() {
        let (mut engine, _clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        assert!(engine.start_round_with(fruits(&["🍍", "🍎", "🍎"])).is_err());
        assert!(engine.start_round_with(fruits(&["🍎"])).is_err());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_null_host_plays_through() {
        let clock = ManualClock::new();
        let mut engine = SequenceEngine::with_clock(EngineConfig::seeded(8), NullHost, clock.clone());
        engine.start_game();

        for _ in 0..2 {
            finish_reveal(&mut engine, &clock);
            for symbol in engine.master().to_vec() {
                engine.submit_choice(symbol);
            }
        }
        assert_eq!(engine.state().level, 2);
    }

    #[test]
    fn test_borrowed_and_boxed_hosts() {
        let clock = ManualClock::new();
        let mut recorder = RecordingHost::default();
        {
            let mut engine =
                SequenceEngine::with_clock(EngineConfig::seeded(8), &mut recorder, clock.clone());
            engine.start_game();
            engine.show_result(EndReason::Manual);
        }
        assert_eq!(recorder.results().len(), 1);
        assert!(recorder.calls.contains(&Call::Screen(Screen::Game)));

        let boxed: Box<dyn Host> = Box::new(RecordingHost::default());
        let mut engine = SequenceEngine::with_clock(EngineConfig::seeded(8), boxed, clock);
        engine.start_game();
        assert_eq!(engine.phase(), Phase::Revealing { index: 0 });
    }

    #[test]
    fn test_submit_option_by_position() {
        let (mut engine, clock) = engine_with(RecordingHost::default(), ScoringKind::Weighted);
        engine.start_game();
        finish_reveal(&mut engine, &clock);

        let target = engine.master()[0].clone();
        let position = engine.options().iter().position(|s| *s == target).unwrap();
        assert!(matches!(
            engine.submit_option(position),
            ChoiceOutcome::Accepted { index: 0 } | ChoiceOutcome::RoundComplete
        ));
        assert_eq!(engine.submit_option(99), ChoiceOutcome::Ignored);
    }
}
