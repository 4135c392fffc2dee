use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Option button by display position (0-based)
    Choose(usize),
    NewGame,
    Reset,
    ShowResult,
    Quit,
    None,
}

pub fn action_for(key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => Action::Choose(c as usize - '1' as usize),
        KeyCode::Char('n') | KeyCode::Enter => Action::NewGame,
        KeyCode::Char('x') => Action::Reset,
        KeyCode::Char('r') => Action::ShowResult,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
