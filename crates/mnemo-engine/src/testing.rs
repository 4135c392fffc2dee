//! Recording host for unit tests

use std::time::Duration;

use mnemo_core::{EndReason, LevelProgress, ResultSummary, Symbol};

use crate::{Feedback, Host, Screen};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Render(Vec<Symbol>),
    Highlight(usize, bool),
    ClearSequence,
    Options(Vec<Symbol>),
    ClearOptions,
    Click,
    Feedback(bool),
    Progress(LevelProgress),
    Screen(Screen),
    Ended(EndReason),
    Result(ResultSummary),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    /// `None` simulates a page without a feedback display
    pub feedback: Option<Duration>,
}

impl RecordingHost {
    pub fn with_feedback(duration: Duration) -> Self {
        RecordingHost {
            calls: Vec::new(),
            feedback: Some(duration),
        }
    }

    pub fn last_options(&self) -> Option<&[Symbol]> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Options(o) => Some(o.as_slice()),
            _ => None,
        })
    }

    pub fn results(&self) -> Vec<&ResultSummary> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Result(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.calls.iter().filter(|c| *c == wanted).count()
    }
}

impl Host for RecordingHost {
    fn render_sequence(&mut self, sequence: &[Symbol]) {
        self.calls.push(Call::Render(sequence.to_vec()));
    }

    fn highlight(&mut self, index: usize, active: bool) {
        self.calls.push(Call::Highlight(index, active));
    }

    fn clear_sequence(&mut self) {
        self.calls.push(Call::ClearSequence);
    }

    fn show_options(&mut self, options: &[Symbol]) {
        self.calls.push(Call::Options(options.to_vec()));
    }

    fn clear_options(&mut self) {
        self.calls.push(Call::ClearOptions);
    }

    fn play_click(&mut self) {
        self.calls.push(Call::Click);
    }

    fn show_feedback(&mut self, success: bool) -> Feedback {
        self.calls.push(Call::Feedback(success));
        match self.feedback {
            Some(d) => Feedback::Timed(d),
            None => Feedback::Unavailable,
        }
    }

    fn update_progress(&mut self, progress: LevelProgress) {
        self.calls.push(Call::Progress(progress));
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.calls.push(Call::Screen(screen));
    }

    fn game_ended(&mut self, reason: EndReason) {
        self.calls.push(Call::Ended(reason));
    }

    fn show_result(&mut self, summary: &ResultSummary) {
        self.calls.push(Call::Result(summary.clone()));
    }
}
