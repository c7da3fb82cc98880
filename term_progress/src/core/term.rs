// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty

//! Is the output stream an interactive terminal? Progress sequences are only written
//! when it is. The check sits behind the [`IsInteractiveOutput`] trait so that tests can
//! swap in [`MockTerminal`] and exercise both paths without a real TTY.
//!
//! [`MockTerminal`]: crate::MockTerminal

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

impl From<bool> for TTYResult {
    fn from(is_tty: bool) -> Self {
        if is_tty {
            TTYResult::IsInteractive
        } else {
            TTYResult::IsNotInteractive
        }
    }
}

/// Process output streams that can carry progress sequences.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Capability that answers "is my destination an interactive terminal?".
///
/// Implementations must not panic. A closed or otherwise invalid stream is reported as
/// [`TTYResult::IsNotInteractive`].
pub trait IsInteractiveOutput: Send + Sync {
    fn is_interactive_output(&self) -> TTYResult;
}

/// Returns `true` if `stream` is attached to a terminal device.
///
/// Uses [`rustix`] [`isatty`] on Unix, and [`std::io::IsTerminal`] everywhere else. Both
/// return `false` (rather than failing) for a closed file descriptor or handle.
///
/// [`isatty`]: fn@rustix::termios::isatty
#[cfg(unix)]
#[must_use]
pub fn is_a_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => rustix::termios::isatty(std::io::stdout()),
        Stream::Stderr => rustix::termios::isatty(std::io::stderr()),
    }
}

/// Returns `true` if `stream` is attached to a terminal device.
#[cfg(not(unix))]
#[must_use]
pub fn is_a_tty(stream: Stream) -> bool {
    use std::io::IsTerminal;
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

/// The real check, bound to one of the process output streams. Pair it with the
/// [`OutputDevice`] that writes to the same stream.
///
/// [`OutputDevice`]: crate::OutputDevice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTerminalCheck {
    pub stream: Stream,
}

impl StreamTerminalCheck {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl IsInteractiveOutput for StreamTerminalCheck {
    fn is_interactive_output(&self) -> TTYResult { is_a_tty(self.stream).into() }
}

/// The real check for any other destination, eg: a [`std::fs::File`] wrapped in an
/// [`OutputDevice`]. Hand it a handle to the same file the device writes to, such as a
/// [`std::fs::File::try_clone()`] of it.
///
/// ```no_run
/// use r3bl_term_progress::{HandleTerminalCheck, OutputDevice, ProgressConfig,
///                          ProgressEncoder};
///
/// let file = std::fs::File::create("/tmp/build.log")?;
/// let encoder = ProgressEncoder::new(
///     OutputDevice::new(file.try_clone()?),
///     HandleTerminalCheck::new(file),
///     ProgressConfig::default(),
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// [`OutputDevice`]: crate::OutputDevice
#[derive(Debug)]
pub struct HandleTerminalCheck<T> {
    pub handle: T,
}

impl<T> HandleTerminalCheck<T> {
    #[must_use]
    pub fn new(handle: T) -> Self { Self { handle } }
}

#[cfg(unix)]
impl<T: std::os::fd::AsFd + Send + Sync> IsInteractiveOutput for HandleTerminalCheck<T> {
    fn is_interactive_output(&self) -> TTYResult {
        rustix::termios::isatty(&self.handle).into()
    }
}

#[cfg(not(unix))]
impl<T: std::io::IsTerminal + Send + Sync> IsInteractiveOutput for HandleTerminalCheck<T> {
    fn is_interactive_output(&self) -> TTYResult { self.handle.is_terminal().into() }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_tty_result_from_bool() {
        assert_eq!(TTYResult::from(true), TTYResult::IsInteractive);
        assert_eq!(TTYResult::from(false), TTYResult::IsNotInteractive);
    }

    /// The answer depends on how the tests are run (`cargo test` in a terminal vs CI), so
    /// this only checks that both streams can be asked without panicking and that the
    /// trait agrees with the free function.
    #[test]
    fn test_stream_check_agrees_with_is_a_tty() {
        for stream in [Stream::Stdout, Stream::Stderr] {
            let check = StreamTerminalCheck { stream };
            assert_eq!(check.is_interactive_output(), is_a_tty(stream).into());
        }
    }

    #[test]
    fn test_regular_file_is_not_interactive() {
        let path = std::env::temp_dir()
            .join(format!("term_progress_tty_{}.txt", uuid::Uuid::new_v4()));
        let file = fs::File::create(&path).unwrap();

        let check = HandleTerminalCheck::new(file);
        assert_eq!(check.is_interactive_output(), TTYResult::IsNotInteractive);

        drop(check);
        fs::remove_file(&path).unwrap();
    }
}
