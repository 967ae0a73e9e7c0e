//! Terminal setup and teardown.
//!
//! The board needs raw mode, the alternate screen and mouse capture (for
//! clicking and dragging cards). This module switches those on and back off
//! again on every exit path, panics included.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, warn};

/// Whether keyboard enhancement flags were pushed and must be popped.
static KEYBOARD_ENHANCED: AtomicBool = AtomicBool::new(false);

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Puts the terminal in raw mode on the alternate screen with mouse capture.
///
/// Where the terminal supports it, modified keys are reported unambiguously
/// so that `Ctrl+Enter` is distinct from `Enter`.
///
/// # Errors
///
/// Returns an error if any terminal operation fails. Raw mode is switched
/// back off when entering the alternate screen fails.
///
/// # Examples
///
/// ```no_run
/// use tack_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// // Draw the board...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(TerminalError::Setup(err));
    }
    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        match execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => KEYBOARD_ENHANCED.store(true, Ordering::SeqCst),
            Err(err) => warn!(error = %err, "could not enable keyboard enhancement"),
        }
    }
    debug!(
        keyboard_enhanced = KEYBOARD_ENHANCED.load(Ordering::SeqCst),
        "terminal ready"
    );
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor again.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    if KEYBOARD_ENHANCED.swap(false, Ordering::SeqCst) {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .map_err(TerminalError::Restore)?;
    }
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    debug!("terminal restored");
    Ok(())
}

/// An initialized terminal that is restored when dropped.
///
/// Call [`finish`](Self::finish) to restore it and see any error; dropping
/// the session without finishing restores it on a best-effort basis.
///
/// # Examples
///
/// ```no_run
/// use tack_tui::terminal::TerminalSession;
///
/// # fn example() -> Result<(), tack_tui::terminal::TerminalError> {
/// let mut session = TerminalSession::start()?;
/// session.terminal_mut().clear().ok();
/// session.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Sets up the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if [`setup_terminal`] fails.
    pub fn start() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: setup_terminal()?,
            restored: false,
        })
    }

    /// Returns the terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if [`restore_terminal`] fails.
    pub fn finish(mut self) -> Result<(), TerminalError> {
        self.restored = true;
        restore_terminal(&mut self.terminal)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(err) = restore_terminal(&mut self.terminal) {
            warn!(error = %err, "could not restore terminal");
        }
    }
}

/// Installs a panic hook that restores the terminal before reporting.
///
/// The panic is also logged, so it ends up in the log file even though the
/// alternate screen swallows anything printed while the board is shown.
/// The previous hook still runs afterwards.
///
/// Call this once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if KEYBOARD_ENHANCED.swap(false, Ordering::SeqCst) {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        error!(panic = %panic_info, "tack panicked");
        original_hook(panic_info);
    }));
}
