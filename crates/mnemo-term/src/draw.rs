//! Paint the board with crossterm

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use mnemo_core::{ResultSummary, ScoreTier};
use mnemo_engine::Screen;

use crate::board::Board;

const HELP: &str = "[1-9] choose  [n] new game  [r] result  [x] reset  [q] quit";

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::High => Color::Green,
        ScoreTier::Medium => Color::Yellow,
        ScoreTier::Low => Color::Red,
    }
}

pub fn draw<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(2, 1))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("Mnemo - repeat the sequence"),
        SetAttribute(Attribute::Reset)
    )?;

    match board.screen {
        Screen::Start => {
            queue!(out, MoveTo(2, 3), Print("Press [n] to start."))?;
        }
        Screen::Game => draw_game(out, board)?,
        Screen::Result => {
            if let Some(result) = &board.result {
                draw_result(out, result)?;
            }
        }
    }

    queue!(out, MoveTo(2, 14), SetForegroundColor(Color::DarkGrey), Print(HELP), ResetColor)?;
    out.flush()
}

fn draw_game<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    if let Some(progress) = board.progress {
        queue!(
            out,
            MoveTo(2, 3),
            Print(format!(
                "Level {}  ({}/{})",
                progress.level, progress.successes, progress.required
            ))
        )?;
    }

    queue!(out, MoveTo(2, 5))?;
    for (i, symbol) in board.sequence.iter().enumerate() {
        if board.active == Some(i) {
            queue!(out, Print(format!("[{}] ", symbol)))?;
        } else {
            queue!(out, Print(" ·  "))?;
        }
    }

    queue!(out, MoveTo(2, 8))?;
    for (i, symbol) in board.options.iter().enumerate() {
        queue!(out, Print(format!("{}:{}  ", i + 1, symbol)))?;
    }

    queue!(out, MoveTo(2, 10))?;
    for symbol in &board.picked {
        queue!(out, Print(format!("{} ", symbol)))?;
    }

    match board.feedback {
        Some(true) => queue!(
            out,
            MoveTo(2, 12),
            SetForegroundColor(Color::Green),
            Print("Correct!"),
            ResetColor
        )?,
        Some(false) => queue!(
            out,
            MoveTo(2, 12),
            SetForegroundColor(Color::Red),
            Print("Wrong!"),
            ResetColor
        )?,
        None => {}
    }
    Ok(())
}

fn draw_result<W: Write>(out: &mut W, result: &ResultSummary) -> io::Result<()> {
    queue!(
        out,
        MoveTo(2, 3),
        Print(format!("Game over ({})", result.reason)),
        MoveTo(2, 5),
        Print("Score: "),
        SetForegroundColor(tier_color(result.tier)),
        SetAttribute(Attribute::Bold),
        Print(result.score),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(2, 6),
        Print(format!("Correct sequences: {}", result.correct_sequences)),
        MoveTo(2, 7),
        Print(format!("Accuracy: {:.0}%", result.accuracy * 100.0)),
        MoveTo(2, 8),
        Print(format!("Time: {}", result.elapsed_label())),
        MoveTo(2, 9),
        Print(format!("Level reached: {}", result.level))
    )?;
    Ok(())
}
