//! Terminal shell around the player.
//!
//! Owns the terminal (raw mode, alternate screen, mouse capture) and the
//! single dispatch loop. Input events and sync ticks are handled one at a
//! time on this thread, in arrival order.

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crate::backend::MediaBackend;
use crate::player::app::Player;
use crate::player::input::handle_event;
use crate::player::render::{self, PlayerLayout};
use crate::player::state::InputResult;

/// Longest wait for input when no sync tick is pending.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Terminal in player mode; restored on drop, including on panic.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the player until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run<B: MediaBackend>(player: &mut Player<B>) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    player.start(Instant::now());

    loop {
        let mut layout = PlayerLayout::default();
        session.terminal.draw(|frame| {
            layout = render::layout(frame.area(), player.transport().indicator().is_visible());
            render::render_player(frame, player, &layout);
        })?;

        let timeout = poll_timeout(player.next_deadline(), Instant::now());
        if event::poll(timeout)? {
            let event = event::read()?;
            if handle_event(event, player, &layout, Instant::now()) == InputResult::Quit {
                tracing::info!("quit requested");
                return Ok(());
            }
        }

        player.tick(Instant::now());
    }
}

/// How long to wait for input before the next sync tick is due.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map(|deadline| deadline.saturating_duration_since(now))
        .unwrap_or(IDLE_WAIT)
        .min(IDLE_WAIT)
}
