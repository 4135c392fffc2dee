//! Recording host
//!
//! Logs every host call with the game time it happened at, so tests can
//! check ordering and reveal timing as well as content.

use std::time::Duration;

use mnemo_core::{EndReason, GameTime, LevelProgress, ResultSummary, Symbol};
use mnemo_engine::{Feedback, Host, Screen};
use mnemo_time::{Clock, ManualClock};

/// One host call
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Render(Vec<Symbol>),
    Highlight { index: usize, active: bool },
    ClearSequence,
    Options(Vec<Symbol>),
    ClearOptions,
    Click,
    Feedback { success: bool },
    Progress(LevelProgress),
    Screen(Screen),
    Ended(EndReason),
    Result(ResultSummary),
}

/// Host that records what the engine asked of it
#[derive(Debug)]
pub struct RecordingHost {
    clock: ManualClock,
    events: Vec<(GameTime, HostEvent)>,
    feedback: Option<Duration>,
}

impl RecordingHost {
    /// Host without a feedback display
    pub fn new(clock: ManualClock) -> Self {
        RecordingHost {
            clock,
            events: Vec::new(),
            feedback: None,
        }
    }

    /// Host whose feedback plays for `duration`
    pub fn with_feedback(clock: ManualClock, duration: Duration) -> Self {
        RecordingHost {
            feedback: Some(duration),
            ..Self::new(clock)
        }
    }

    pub fn events(&self) -> &[(GameTime, HostEvent)] {
        &self.events
    }

    /// Events without timestamps
    pub fn calls(&self) -> impl DoubleEndedIterator<Item = &HostEvent> {
        self.events.iter().map(|(_, e)| e)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, wanted: &HostEvent) -> usize {
        self.calls().filter(|e| *e == wanted).count()
    }

    /// Times at which sequence items were activated
    pub fn activations(&self) -> Vec<(GameTime, usize)> {
        self.events
            .iter()
            .filter_map(|(t, e)| match e {
                HostEvent::Highlight {
                    index,
                    active: true,
                } => Some((*t, *index)),
                _ => None,
            })
            .collect()
    }

    pub fn last_options(&self) -> Option<&[Symbol]> {
        self.calls().rev().find_map(|e| match e {
            HostEvent::Options(o) => Some(o.as_slice()),
            _ => None,
        })
    }

    pub fn results(&self) -> Vec<&ResultSummary> {
        self.calls()
            .filter_map(|e| match e {
                HostEvent::Result(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn end_reasons(&self) -> Vec<EndReason> {
        self.calls()
            .filter_map(|e| match e {
                HostEvent::Ended(reason) => Some(*reason),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, event: HostEvent) {
        self.events.push((self.clock.now(), event));
    }
}

impl Host for RecordingHost {
    fn render_sequence(&mut self, sequence: &[Symbol]) {
        self.record(HostEvent::Render(sequence.to_vec()));
    }

    fn highlight(&mut self, index: usize, active: bool) {
        self.record(HostEvent::Highlight { index, active });
    }

    fn clear_sequence(&mut self) {
        self.record(HostEvent::ClearSequence);
    }

    fn show_options(&mut self, options: &[Symbol]) {
        self.record(HostEvent::Options(options.to_vec()));
    }

    fn clear_options(&mut self) {
        self.record(HostEvent::ClearOptions);
    }

    fn play_click(&mut self) {
        self.record(HostEvent::Click);
    }

    fn show_feedback(&mut self, success: bool) -> Feedback {
        self.record(HostEvent::Feedback { success });
        match self.feedback {
            Some(duration) => Feedback::Timed(duration),
            None => Feedback::Unavailable,
        }
    }

    fn update_progress(&mut self, progress: LevelProgress) {
        self.record(HostEvent::Progress(progress));
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.record(HostEvent::Screen(screen));
    }

    fn game_ended(&mut self, reason: EndReason) {
        self.record(HostEvent::Ended(reason));
    }

    fn show_result(&mut self, summary: &ResultSummary) {
        self.record(HostEvent::Result(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_timestamped() {
        let clock = ManualClock::new();
        let mut host = RecordingHost::new(clock.clone());

        host.highlight(0, true);
        clock.advance(Duration::from_millis(750));
        host.highlight(0, false);
        host.highlight(1, true);

        assert_eq!(
            host.activations(),
            vec![(GameTime::ZERO, 0), (GameTime::from_millis(750), 1)]
        );
        assert_eq!(host.events().len(), 3);
    }

    #[test]
    fn test_feedback_modes() {
        let clock = ManualClock::new();
        let mut silent = RecordingHost::new(clock.clone());
        let mut timed = RecordingHost::with_feedback(clock, Duration::from_millis(500));

        assert_eq!(silent.show_feedback(true), Feedback::Unavailable);
        assert_eq!(
            timed.show_feedback(false),
            Feedback::Timed(Duration::from_millis(500))
        );
        assert_eq!(timed.count(&HostEvent::Feedback { success: false }), 1);
    }
}
