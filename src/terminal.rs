//! Terminal input and output using crossterm.
//!
//! The terminal is switched to raw mode on an alternate screen for the
//! lifetime of [`CrosstermTerminal`] and restored when it is dropped, so the
//! shell comes back intact even if the session ends with an error.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use tensor_rotate::{Axis, Command, SectionView, Terminal};

/// Help line shown under the section.
const CONTROLS: &str = "[x/X y/Y z/Z] rotate  [Left/Right] section  [q] quit";

/// Maps a key to a session command.
///
/// Lowercase axis letters rotate about the positive axis, uppercase about the
/// negative one.
pub fn command_for_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Command::Quit,
            _ => Command::Ignore,
        };
    }
    match key.code {
        KeyCode::Char('x') => Command::Rotate(Axis::XPositive),
        KeyCode::Char('X') => Command::Rotate(Axis::XNegative),
        KeyCode::Char('y') => Command::Rotate(Axis::YPositive),
        KeyCode::Char('Y') => Command::Rotate(Axis::YNegative),
        KeyCode::Char('z') => Command::Rotate(Axis::ZPositive),
        KeyCode::Char('Z') => Command::Rotate(Axis::ZNegative),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('k') => {
            Command::NextSection
        }
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('j') => {
            Command::PreviousSection
        }
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}

/// The process's own terminal, in raw mode.
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            log::error!("failed to leave the alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to restore the terminal mode: {e}");
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_command(&mut self) -> io::Result<Command> {
        loop {
            // crossterm consumes whole escape sequences, so arrow keys arrive
            // as a single event
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(command_for_key(key));
                }
                Event::Resize(..) => return Ok(Command::Ignore),
                _ => {}
            }
        }
    }

    fn render(&mut self, view: &SectionView<'_>) -> io::Result<()> {
        let last = view.dimension().get() - 1;
        queue!(
            self.stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(format!("section {}/{last}", view.section())),
            MoveToNextLine(2),
        )?;
        for row in view.rows() {
            queue!(
                self.stdout,
                Print(String::from_utf8_lossy(row)),
                MoveToNextLine(1)
            )?;
        }
        queue!(self.stdout, MoveToNextLine(1), Print(CONTROLS))?;
        self.stdout.flush()
    }
}
