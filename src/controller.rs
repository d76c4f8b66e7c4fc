//! The interactive session: a read, act, render loop over one volume.
//!
//! Input and output go through the [`Terminal`] trait, so the session itself
//! never touches a real terminal.

use std::io;

use crate::geometry::{Axis, QuartetError};
use crate::volume::{SectionView, Volume};

/// A decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotate the whole volume 90 degrees about an axis.
    Rotate(Axis),
    /// Show the next z-slice.
    NextSection,
    /// Show the previous z-slice.
    PreviousSection,
    Quit,
    /// Unrecognized input; the screen is redrawn and nothing else happens.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Input and output capabilities the session needs.
pub trait Terminal {
    /// Blocks until the next command is available.
    fn read_command(&mut self) -> io::Result<Command>;

    /// Draws the visible section.
    fn render(&mut self, view: &SectionView<'_>) -> io::Result<()>;
}

/// Error that ends a session abnormally.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("rotation failed: {0}")]
    Rotation(#[from] QuartetError),
    #[error("failed to render section")]
    Render(#[source] io::Error),
}

/// A volume together with the index of the z-slice being shown.
pub struct Session {
    volume: Volume,
    section: usize,
    state: SessionState,
}

impl Session {
    /// Starts a session showing section 0.
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            section: 0,
            state: SessionState::Running,
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Index of the visible z-slice, always in `0..N`.
    pub fn section(&self) -> usize {
        self.section
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn view(&self) -> SectionView<'_> {
        self.volume.view(self.section)
    }

    /// Applies one command and returns the resulting state.
    ///
    /// Once terminated, further commands have no effect.
    pub fn apply(&mut self, command: Command) -> Result<SessionState, QuartetError> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }
        match command {
            Command::Rotate(axis) => self.volume.rotate(axis)?,
            Command::NextSection => {
                let last = self.volume.dimension().get() - 1;
                self.section = (self.section + 1).min(last);
                log::debug!("showing section {}", self.section);
            }
            Command::PreviousSection => {
                self.section = self.section.saturating_sub(1);
                log::debug!("showing section {}", self.section);
            }
            Command::Quit => self.state = SessionState::Terminated,
            Command::Ignore => log::trace!("ignored input"),
        }
        Ok(self.state)
    }

    /// Runs the loop until a quit command or a failed read.
    ///
    /// Renders once up front and again after every command that does not quit.
    pub fn run(&mut self, terminal: &mut impl Terminal) -> Result<(), SessionError> {
        log::info!(
            "starting session on a dimension {} volume",
            self.volume.dimension()
        );
        terminal.render(&self.view()).map_err(SessionError::Render)?;

        while self.state == SessionState::Running {
            let command = match terminal.read_command() {
                Ok(command) => command,
                Err(e) => {
                    log::warn!("failed to read input, ending session: {e}");
                    self.state = SessionState::Terminated;
                    break;
                }
            };
            if self.apply(command)? == SessionState::Terminated {
                break;
            }
            terminal.render(&self.view()).map_err(SessionError::Render)?;
        }

        log::info!("session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::grid::Dimension;

    /// Replays a fixed list of commands and records every rendered frame.
    /// Reading past the end of the script fails like a closed input stream.
    struct ScriptedTerminal {
        script: VecDeque<Command>,
        frames: Vec<(usize, String)>,
        reads: usize,
    }

    impl ScriptedTerminal {
        fn new(script: impl IntoIterator<Item = Command>) -> Self {
            Self {
                script: script.into_iter().collect(),
                frames: Vec::new(),
                reads: 0,
            }
        }
    }

    impl Terminal for ScriptedTerminal {
        fn read_command(&mut self) -> io::Result<Command> {
            self.reads += 1;
            self.script
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn render(&mut self, view: &SectionView<'_>) -> io::Result<()> {
            self.frames.push((view.section(), view.to_string()));
            Ok(())
        }
    }

    fn session(edge: usize) -> Session {
        Session::new(Volume::new(Dimension::new(edge).unwrap()))
    }

    #[test]
    fn test_navigation_clamps_to_volume() {
        let mut s = session(3);
        s.apply(Command::PreviousSection).unwrap();
        assert_eq!(s.section(), 0);
        for _ in 0..5 {
            s.apply(Command::NextSection).unwrap();
        }
        assert_eq!(s.section(), 2);
        s.apply(Command::PreviousSection).unwrap();
        assert_eq!(s.section(), 1);
    }

    #[test]
    fn test_navigation_does_not_touch_volume() {
        let mut s = session(4);
        let before = s.volume().clone();
        s.apply(Command::NextSection).unwrap();
        s.apply(Command::PreviousSection).unwrap();
        s.apply(Command::Ignore).unwrap();
        assert_eq!(s.volume(), &before);
        assert_eq!(s.state(), SessionState::Running);
    }

    #[test]
    fn test_rotate_command_rotates_volume() {
        let mut s = session(4);
        let mut expected = s.volume().clone();
        expected.rotate(Axis::YNegative).unwrap();
        s.apply(Command::Rotate(Axis::YNegative)).unwrap();
        assert_eq!(s.volume(), &expected);
        assert_eq!(s.section(), 0);
    }

    #[test]
    fn test_quit_terminates_immediately() {
        let mut s = session(3);
        s.apply(Command::NextSection).unwrap();
        assert_eq!(s.apply(Command::Quit), Ok(SessionState::Terminated));
        let before = s.volume().clone();
        assert_eq!(
            s.apply(Command::Rotate(Axis::XPositive)),
            Ok(SessionState::Terminated)
        );
        assert_eq!(s.volume(), &before);
    }

    #[test]
    fn test_run_stops_at_first_quit() {
        let mut s = session(3);
        let mut terminal = ScriptedTerminal::new([
            Command::NextSection,
            Command::Rotate(Axis::ZPositive),
            Command::Quit,
            Command::NextSection,
        ]);
        s.run(&mut terminal).unwrap();

        assert_eq!(terminal.reads, 3);
        assert_eq!(terminal.script.len(), 1);
        assert_eq!(s.state(), SessionState::Terminated);
        // initial frame plus one per non-quit command
        assert_eq!(terminal.frames.len(), 3);
        assert_eq!(terminal.frames[0], (0, "ABC\nDEF\nGHI\n".to_owned()));
        assert_eq!(terminal.frames[1], (1, "JKL\nMNO\nPQR\n".to_owned()));
        assert_eq!(terminal.frames[2], (1, "PMJ\nQNK\nROL\n".to_owned()));
    }

    #[test]
    fn test_read_failure_ends_session() {
        let mut s = session(5);
        let mut terminal = ScriptedTerminal::new([Command::Ignore, Command::NextSection]);
        s.run(&mut terminal).unwrap();
        assert_eq!(s.state(), SessionState::Terminated);
        assert_eq!(s.section(), 1);
        assert_eq!(terminal.frames.len(), 3);
    }

    #[test]
    fn test_render_failure_is_reported() {
        struct BrokenScreen;

        impl Terminal for BrokenScreen {
            fn read_command(&mut self) -> io::Result<Command> {
                Ok(Command::Quit)
            }

            fn render(&mut self, _view: &SectionView<'_>) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "screen gone"))
            }
        }

        let result = session(3).run(&mut BrokenScreen);
        assert!(matches!(result, Err(SessionError::Render(_))));
    }
}
