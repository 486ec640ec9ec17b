//! Terminal mode handling
//!
//! The line editor needs keystrokes delivered immediately and without echo.
//! [`RawModeGuard`] switches that mode on and restores the previous mode when
//! it goes out of scope, on every exit path.

use crossterm::terminal;
use std::io;

/// A terminal whose input mode can be switched for single-key reads
pub trait TerminalMode {
    /// Stop line buffering and echo
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the mode change.
    fn enable_raw(&mut self) -> io::Result<()>;

    /// Restore the mode that was active before [`TerminalMode::enable_raw`]
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the mode change.
    fn restore(&mut self) -> io::Result<()>;

    /// Width of the terminal in columns, used to find where lines wrap
    ///
    /// `u16::MAX` means lines never wrap.
    fn columns(&self) -> u16 {
        u16::MAX
    }
}

/// The process's controlling terminal, switched through crossterm
#[derive(Debug, Default)]
pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn enable_raw(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn columns(&self) -> u16 {
        match terminal::size() {
            Ok((width, _)) if width > 0 => width,
            Ok(_) => u16::MAX,
            Err(e) => {
                log::debug!("terminal size unavailable: {e}");
                u16::MAX
            }
        }
    }
}

/// Holds raw mode for its lifetime
pub struct RawModeGuard<'a, M: TerminalMode + ?Sized> {
    mode: &'a mut M,
}

impl<'a, M: TerminalMode + ?Sized> RawModeGuard<'a, M> {
    /// Enable raw mode
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled. The terminal is left
    /// untouched in that case.
    pub fn acquire(mode: &'a mut M) -> io::Result<Self> {
        mode.enable_raw()?;
        Ok(Self { mode })
    }
}

impl<M: TerminalMode + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if let Err(e) = self.mode.restore() {
            log::error!("failed to restore terminal mode: {e}");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingMode;
    use super::*;

    #[test]
    fn guard_restores_on_drop() {
        let mut mode = RecordingMode::default();
        {
            let _guard = RawModeGuard::acquire(&mut mode).unwrap();
        }
        assert_eq!(mode.enabled, 1);
        assert_eq!(mode.restored, 1);
        assert!(!mode.is_raw());
    }

    #[test]
    fn guard_restores_on_early_return() {
        fn failing(mode: &mut RecordingMode) -> io::Result<()> {
            let _guard = RawModeGuard::acquire(mode)?;
            Err(io::Error::other("read failed"))
        }

        let mut mode = RecordingMode::default();
        assert!(failing(&mut mode).is_err());
        assert!(!mode.is_raw());
    }

    #[test]
    fn failed_enable_does_not_restore() {
        let mut mode = RecordingMode {
            fail_enable: true,
            ..RecordingMode::default()
        };
        assert!(RawModeGuard::acquire(&mut mode).is_err());
        assert_eq!(mode.restored, 0);
    }
}
