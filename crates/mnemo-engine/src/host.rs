//! Host collaborators
//!
//! The engine drives whatever surface embeds it (a browser page, a terminal,
//! a test recorder) through this trait. Every method has a default so a host
//! only implements what it actually has; a missing feedback display falls back
//! to advancing immediately.

use std::time::Duration;

use mnemo_core::{EndReason, LevelProgress, ResultSummary, Symbol};

/// How the host handled a feedback request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// No feedback display; the engine continues immediately
    Unavailable,
    /// Feedback is playing; the engine resumes after this long
    Timed(Duration),
}

/// Screens a host may switch between
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Game,
    Result,
}

/// Surface the engine renders to
#[allow(unused_variables)]
pub trait Host {
    /// Lay out the master sequence, all items inactive
    fn render_sequence(&mut self, sequence: &[Symbol]) {}

    /// Mark one sequence item active or inactive
    fn highlight(&mut self, index: usize, active: bool) {}

    /// Remove the sequence display
    fn clear_sequence(&mut self) {}

    /// Show the option buttons, in display order
    fn show_options(&mut self, options: &[Symbol]) {}

    /// Remove the option buttons
    fn clear_options(&mut self) {}

    /// Optional click sound
    fn play_click(&mut self) {}

    /// Play success/failure feedback
    fn show_feedback(&mut self, success: bool) -> Feedback {
        Feedback::Unavailable
    }

    /// Level indicator update after a successful round
    fn update_progress(&mut self, progress: LevelProgress) {}

    fn switch_screen(&mut self, screen: Screen) {}

    /// End-of-game dispatcher
    fn game_ended(&mut self, reason: EndReason) {}

    /// Result view
    fn show_result(&mut self, summary: &ResultSummary) {}
}

/// Host with no integrations at all
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl Host for NullHost {}

impl<H: Host + ?Sized> Host for &mut H {
    fn render_sequence(&mut self, sequence: &[Symbol]) {
        (**self).render_sequence(sequence)
    }

    fn highlight(&mut self, index: usize, active: bool) {
        (**self).highlight(index, active)
    }

    fn clear_sequence(&mut self) {
        (**self).clear_sequence()
    }

    fn show_options(&mut self, options: &[Symbol]) {
        (**self).show_options(options)
    }

    fn clear_options(&mut self) {
        (**self).clear_options()
    }

    fn play_click(&mut self) {
        (**self).play_click()
    }

    fn show_feedback(&mut self, success: bool) -> Feedback {
        (**self).show_feedback(success)
    }

    fn update_progress(&mut self, progress: LevelProgress) {
        (**self).update_progress(progress)
    }

    fn switch_screen(&mut self, screen: Screen) {
        (**self).switch_screen(screen)
    }

    fn game_ended(&mut self, reason: EndReason) {
        (**self).game_ended(reason)
    }

    fn show_result(&mut self, summary: &ResultSummary) {
        (**self).show_result(summary)
    }
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn render_sequence(&mut self, sequence: &[Symbol]) {
        (**self).render_sequence(sequence)
    }

    fn highlight(&mut self, index: usize, active: bool) {
        (**self).highlight(index, active)
    }

    fn clear_sequence(&mut self) {
        (**self).clear_sequence()
    }

    fn show_options(&mut self, options: &[Symbol]) {
        (**self).show_options(options)
    }

    fn clear_options(&mut self) {
        (**self).clear_options()
    }

    fn play_click(&mut self) {
        (**self).play_click()
    }

    fn show_feedback(&mut self, success: bool) -> Feedback {
        (**self).show_feedback(success)
    }

    fn update_progress(&mut self, progress: LevelProgress) {
        (**self).update_progress(progress)
    }

    fn switch_screen(&mut self, screen: Screen) {
        (**self).switch_screen(screen)
    }

    fn game_ended(&mut self, reason: EndReason) {
        (**self).game_ended(reason)
    }

    fn show_result(&mut self, summary: &ResultSummary) {
        (**self).show_result(summary)
    }
}
