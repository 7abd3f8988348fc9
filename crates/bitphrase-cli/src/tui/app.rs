//! Interactive bit collector — state machine and event loop.
//!
//! Design: a modal collector with two phases, collecting → complete. The
//! key-handling core is a pure [`Collector`] so the whole state machine is
//! unit-testable without a terminal; [`App`] wraps it with the crossterm
//! setup/teardown and the draw/poll loop.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Phase of the collection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Complete,
}

/// Result of feeding one key to the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep collecting.
    Continue,
    /// Enter pressed with a full bit string; collection is done.
    Finished,
    /// The user bailed out (Esc or 'q').
    Cancelled,
}

/// Pure bit-entry state machine: current bits, target size, last key.
#[derive(Debug, Clone)]
pub struct Collector {
    target: usize,
    bits: String,
    last_key: Option<char>,
}

impl Collector {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            bits: String::with_capacity(target),
            last_key: None,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn entered(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn last_key(&self) -> Option<char> {
        self.last_key
    }

    pub fn phase(&self) -> Phase {
        if self.bits.len() == self.target {
            Phase::Complete
        } else {
            Phase::Collecting
        }
    }

    /// The most recent `n` bits, for the display window.
    pub fn tail(&self, n: usize) -> &str {
        &self.bits[self.bits.len().saturating_sub(n)..]
    }

    /// Feed one key press. Unrecognized keys are ignored; '0'/'1' past the
    /// target are ignored; Enter is accepted only when the string is full.
    pub fn handle_key(&mut self, key: KeyCode) -> Outcome {
        match key {
            KeyCode::Up | KeyCode::Char('1') => {
                self.last_key = Some('1');
                if self.bits.len() < self.target {
                    self.bits.push('1');
                }
                Outcome::Continue
            }
            KeyCode::Down | KeyCode::Char('0') => {
                self.last_key = Some('0');
                if self.bits.len() < self.target {
                    self.bits.push('0');
                }
                Outcome::Continue
            }
            KeyCode::Backspace => {
                self.bits.pop();
                Outcome::Continue
            }
            KeyCode::Enter => {
                if self.phase() == Phase::Complete {
                    Outcome::Finished
                } else {
                    Outcome::Continue
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => Outcome::Cancelled,
            _ => Outcome::Continue,
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Terminal wrapper around [`Collector`].
pub struct App {
    collector: Collector,
}

impl App {
    pub fn new(target: usize) -> Self {
        Self {
            collector: Collector::new(target),
        }
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Run the collection session. Returns the complete bit string, or
    /// `None` if the user cancelled.
    pub fn run(&mut self) -> io::Result<Option<String>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<Option<String>> {
        loop {
            terminal.draw(|f| super::ui::draw(f, &self.collector))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match self.collector.handle_key(key.code) {
                    Outcome::Continue => {}
                    Outcome::Finished => return Ok(Some(self.collector.bits().to_string())),
                    Outcome::Cancelled => return Ok(None),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(collector: &mut Collector, bits: &str) {
        for c in bits.chars() {
            let key = if c == '1' {
                KeyCode::Char('1')
            } else {
                KeyCode::Char('0')
            };
            assert_eq!(collector.handle_key(key), Outcome::Continue);
        }
    }

    #[test]
    fn collects_ones_and_zeros() {
        let mut c = Collector::new(8);
        fill(&mut c, "10110010");
        assert_eq!(c.bits(), "10110010");
        assert_eq!(c.phase(), Phase::Complete);
    }

    #[test]
    fn arrow_keys_map_to_bits() {
        let mut c = Collector::new(4);
        c.handle_key(KeyCode::Up);
        c.handle_key(KeyCode::Down);
        c.handle_key(KeyCode::Up);
        c.handle_key(KeyCode::Up);
        assert_eq!(c.bits(), "1011");
    }

    #[test]
    fn ignores_input_past_target() {
        let mut c = Collector::new(2);
        fill(&mut c, "11");
        c.handle_key(KeyCode::Char('0'));
        assert_eq!(c.bits(), "11");
        assert_eq!(c.entered(), 2);
    }

    #[test]
    fn backspace_removes_last_bit() {
        let mut c = Collector::new(4);
        fill(&mut c, "101");
        c.handle_key(KeyCode::Backspace);
        assert_eq!(c.bits(), "10");
        assert_eq!(c.phase(), Phase::Collecting);
    }

    #[test]
    fn backspace_on_empty_is_a_no_op() {
        let mut c = Collector::new(4);
        assert_eq!(c.handle_key(KeyCode::Backspace), Outcome::Continue);
        assert_eq!(c.bits(), "");
    }

    #[test]
    fn enter_refused_until_complete() {
        let mut c = Collector::new(3);
        fill(&mut c, "10");
        assert_eq!(c.handle_key(KeyCode::Enter), Outcome::Continue);
        fill(&mut c, "1");
        assert_eq!(c.handle_key(KeyCode::Enter), Outcome::Finished);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut c = Collector::new(4);
        fill(&mut c, "01");
        assert_eq!(c.handle_key(KeyCode::Char('x')), Outcome::Continue);
        assert_eq!(c.handle_key(KeyCode::Tab), Outcome::Continue);
        assert_eq!(c.bits(), "01");
    }

    #[test]
    fn esc_and_q_cancel() {
        let mut c = Collector::new(4);
        assert_eq!(c.handle_key(KeyCode::Esc), Outcome::Cancelled);
        let mut c = Collector::new(4);
        assert_eq!(c.handle_key(KeyCode::Char('q')), Outcome::Cancelled);
    }

    #[test]
    fn tracks_last_key() {
        let mut c = Collector::new(4);
        assert_eq!(c.last_key(), None);
        c.handle_key(KeyCode::Up);
        assert_eq!(c.last_key(), Some('1'));
        c.handle_key(KeyCode::Char('0'));
        assert_eq!(c.last_key(), Some('0'));
    }

    #[test]
    fn tail_windows_the_most_recent_bits() {
        let mut c = Collector::new(8);
        fill(&mut c, "11110000");
        assert_eq!(c.tail(4), "0000");
        assert_eq!(c.tail(100), "11110000");
    }
}
