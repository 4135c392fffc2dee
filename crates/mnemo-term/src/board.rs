//! Terminal host: what the screen should show
//!
//! The engine drives `Board` through the `Host` trait; `draw` paints it.

use std::time::Duration;

use mnemo_core::{EndReason, LevelProgress, ResultSummary, Symbol};
use mnemo_engine::{ChoiceOutcome, Feedback, Host, Phase, Screen, SequenceEngine};
use mnemo_time::Clock;

#[derive(Debug)]
pub struct Board {
    pub screen: Screen,
    /// Sequence being revealed (empty once hidden)
    pub sequence: Vec<Symbol>,
    pub active: Option<usize>,
    pub options: Vec<Symbol>,
    /// Options picked so far this round
    pub picked: Vec<Symbol>,
    /// Outcome of the last round while its feedback plays
    pub feedback: Option<bool>,
    pub progress: Option<LevelProgress>,
    pub ended: Option<EndReason>,
    pub result: Option<ResultSummary>,
    feedback_for: Duration,
    dirty: bool,
}

impl Board {
    /// `feedback_for` of zero means no feedback display
    pub fn new(feedback_for: Duration) -> Self {
        Board {
            screen: Screen::Start,
            sequence: Vec::new(),
            active: None,
            options: Vec::new(),
            picked: Vec::new(),
            feedback: None,
            progress: None,
            ended: None,
            result: None,
            feedback_for,
            dirty: true,
        }
    }

    /// Remember a choice for display
    pub fn pick(&mut self, symbol: Symbol) {
        self.picked.push(symbol);
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn touch(&mut self) {
        self.dirty = true;
    }
}

impl Host for Board {
    fn render_sequence(&mut self, sequence: &[Symbol]) {
        self.sequence = sequence.to_vec();
        self.active = None;
        self.picked.clear();
        self.feedback = None;
        self.touch();
    }

    fn highlight(&mut self, index: usize, active: bool) {
        if active {
            self.active = Some(index);
        } else if self.active == Some(index) {
            self.active = None;
        }
        self.touch();
    }

    fn clear_sequence(&mut self) {
        self.sequence.clear();
        self.active = None;
        self.touch();
    }

    fn show_options(&mut self, options: &[Symbol]) {
        self.options = options.to_vec();
        self.touch();
    }

    fn clear_options(&mut self) {
        self.options.clear();
        self.touch();
    }

    fn show_feedback(&mut self, success: bool) -> Feedback {
        if self.feedback_for.is_zero() {
            return Feedback::Unavailable;
        }
        self.feedback = Some(success);
        self.touch();
        Feedback::Timed(self.feedback_for)
    }

    fn update_progress(&mut self, progress: LevelProgress) {
        self.progress = Some(progress);
        self.touch();
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen == Screen::Game {
            self.result = None;
            self.ended = None;
            self.progress = None;
        }
        self.screen = screen;
        self.touch();
    }

    fn game_ended(&mut self, reason: EndReason) {
        self.ended = Some(reason);
        self.feedback = None;
        self.touch();
    }

    fn show_result(&mut self, summary: &ResultSummary) {
        self.result = Some(summary.clone());
        self.touch();
    }
}

/// Press the option at `position`
///
/// The pressed symbol goes on the board before the engine sees it, so the
/// closing choice of a round stays visible while its feedback plays.
pub fn press<C: Clock>(engine: &mut SequenceEngine<Board, C>, position: usize) -> ChoiceOutcome {
    let takes_input = engine.phase() == Phase::AwaitingInput && !engine.state().locked;
    if let (true, Some(symbol)) = (takes_input, engine.options().get(position).cloned()) {
        engine.host_mut().pick(symbol);
    }
    engine.submit_option(position)
}
