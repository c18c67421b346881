use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::warn;
use rand::Rng;
use slide_puzzle::{hud, Move, Puzzle, Session};

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 10;

const BOARD_TOP: u16 = 2;
const BOARD_LEFT: u16 = 2;
const CELL_WIDTH: u16 = 5;
const PREVIEW_GAP: u16 = 4;
const TICK: Duration = Duration::from_millis(250);

/// Restores the terminal even if drawing fails part way.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn open() -> io::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { out })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

enum Action {
    Slide(Move),
    Click(u16, u16),
    Shuffle,
    Restart,
    Resize(isize),
    TogglePreview,
    Quit,
}

fn action_for(event: Event) -> Option<Action> {
    match event {
        Event::Key(KeyEvent {
            code, modifiers, ..
        }) => match code {
            KeyCode::Up => Some(Action::Slide(Move::Up)),
            KeyCode::Down => Some(Action::Slide(Move::Down)),
            KeyCode::Left => Some(Action::Slide(Move::Left)),
            KeyCode::Right => Some(Action::Slide(Move::Right)),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('s') => Some(Action::Shuffle),
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Resize(1)),
            KeyCode::Char('-') => Some(Action::Resize(-1)),
            KeyCode::Char('p') => Some(Action::TogglePreview),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Action::Click(column, row)),
        _ => None,
    }
}

/// Board position under a terminal cell, if any.
fn position_at(puzzle: &Puzzle, column: u16, row: u16) -> Option<usize> {
    if column < BOARD_LEFT || row < BOARD_TOP {
        return None;
    }
    let col = ((column - BOARD_LEFT) / CELL_WIDTH) as usize;
    let row = (row - BOARD_TOP) as usize;
    puzzle.grid().position(col, row)
}

/// Runs the interactive game until the player quits.
pub fn run<R: Rng>(session: &mut Session<R>) -> io::Result<()> {
    let mut screen = Screen::open()?;
    let mut preview = false;

    loop {
        draw(&mut screen.out, session, preview)?;

        if !event::poll(TICK)? {
            continue;
        }
        let action = match action_for(event::read()?) {
            Some(action) => action,
            None => continue,
        };

        match action {
            Action::Quit => return Ok(()),
            Action::Shuffle => {
                let size = session.grid().size();
                if let Err(err) = session.new_game(size) {
                    warn!("could not deal a new game: {}", err);
                }
            }
            Action::Restart => session.restart(),
            Action::Resize(delta) => {
                let size = session.grid().size() as isize + delta;
                let size = size.clamp(MIN_SIZE as isize, MAX_SIZE as isize) as usize;
                if size != session.grid().size() {
                    if let Err(err) = session.new_game(size) {
                        warn!("could not deal a {0}x{0} game: {1}", size, err);
                    }
                }
            }
            Action::TogglePreview => preview = !preview,
            // A solved board stays put until the player deals again.
            _ if session.is_solved() => {}
            Action::Slide(movement) => {
                session.slide(movement);
            }
            Action::Click(column, row) => {
                if let Some(position) = position_at(session.puzzle(), column, row) {
                    session.attempt_move(position);
                }
            }
        }
    }
}

fn draw_board<W: Write>(out: &mut W, puzzle: &Puzzle, left: u16) -> io::Result<()> {
    let grid = puzzle.grid();
    for (r, row) in puzzle.tiles().chunks(grid.size()).enumerate() {
        queue!(out, MoveTo(left, BOARD_TOP + r as u16))?;
        for &tile in row {
            let cell = if tile == grid.blank_tile() {
                "     ".to_string()
            } else {
                format!("[{:>3}]", tile + 1)
            };
            queue!(out, Print(cell))?;
        }
    }
    Ok(())
}

fn draw<W: Write, R: Rng>(out: &mut W, session: &Session<R>, preview: bool) -> io::Result<()> {
    let puzzle = session.puzzle();
    let size = puzzle.grid().size();

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!("Sliding puzzle {0}x{0}", size))
    )?;
    draw_board(out, puzzle, BOARD_LEFT)?;

    if preview {
        let left = BOARD_LEFT + size as u16 * CELL_WIDTH + PREVIEW_GAP;
        queue!(out, MoveTo(left, BOARD_TOP - 1), Print("Solved:"))?;
        draw_board(out, &Puzzle::solved(puzzle.grid()), left)?;
    }

    let hud_top = BOARD_TOP + size as u16 + 1;
    queue!(
        out,
        MoveTo(0, hud_top),
        Print(format!(
            "Moves: {}   Time: {}",
            session.moves(),
            hud::format_clock(session.elapsed())
        )),
        MoveTo(0, hud_top + 1),
        Print("arrows/click slide  s shuffle  r restart  +/- size  p preview  q quit")
    )?;

    if let Some(summary) = session.summary() {
        queue!(
            out,
            MoveTo(0, hud_top + 3),
            Print(format!("Solved! {}", summary))
        )?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_puzzle::Grid;

    #[test]
    fn clicks_map_to_board_positions() {
        let puzzle = Puzzle::solved(Grid::new(3).unwrap());

        assert_eq!(position_at(&puzzle, BOARD_LEFT, BOARD_TOP), Some(0));
        assert_eq!(
            position_at(&puzzle, BOARD_LEFT + CELL_WIDTH - 1, BOARD_TOP),
            Some(0)
        );
        assert_eq!(
            position_at(&puzzle, BOARD_LEFT + CELL_WIDTH, BOARD_TOP + 1),
            Some(4)
        );
        assert_eq!(
            position_at(&puzzle, BOARD_LEFT + 2 * CELL_WIDTH, BOARD_TOP + 2),
            Some(8)
        );

        assert_eq!(position_at(&puzzle, 0, BOARD_TOP), None);
        assert_eq!(position_at(&puzzle, BOARD_LEFT, 0), None);
        assert_eq!(
            position_at(&puzzle, BOARD_LEFT + 3 * CELL_WIDTH, BOARD_TOP),
            None
        );
        assert_eq!(position_at(&puzzle, BOARD_LEFT, BOARD_TOP + 3), None);
    }
}
