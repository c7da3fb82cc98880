// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use miette::IntoDiagnostic;

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Locks `$device` and hands back a `&mut dyn Write` to it. The lock is held until the
/// end of the enclosing block, so locking the same device again inside that block
/// deadlocks. Keep the borrow in its own block:
///
/// ```
/// use r3bl_term_progress::{lock_output_device_as_mut, LockedOutputDevice, OutputDevice};
///
/// let device = OutputDevice::new_stderr();
/// {
///     let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = writer.write_all(b"\x1b]9;4;3\x07");
/// }
/// let _ = device.write_all_and_flush(b"\x1b]9;4;0\x07");
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where progress sequences go: stdout, stderr, a file, or a [`StdoutMock`] in tests.
///
/// Cloning is cheap and clones share the writer and its lock. Prefer
/// [`Self::write_all_and_flush()`]; drop down to [`lock_output_device_as_mut`] only when
/// several writes must land together.
///
/// [`StdoutMock`]: crate::StdoutMock
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(std::io::stdout()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::new(std::io::stderr()) }

    /// Wrap any writer, eg: a [`std::fs::File`] the caller has opened.
    #[must_use]
    pub fn new(writer: impl std::io::Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: false,
        }
    }
}

impl OutputDevice {
    /// Returns the guard for the underlying writer. Every clone of this device hands out
    /// the same lock, which is what keeps sequences from different threads apart.
    ///
    /// A poisoned lock (some thread panicked while writing) is recovered rather than
    /// propagated. A half written sequence is harmless to the writer itself, and
    /// reporting progress must never panic.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes all of `bytes` and flushes, holding the lock for both. Writes from other
    /// clones of this device can't land between them.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the underlying writer fails.
    pub fn write_all_and_flush(&self, bytes: &[u8]) -> miette::Result<()> {
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(self);
        mut_ref.write_all(bytes).into_diagnostic()?;
        mut_ref.flush().into_diagnostic()?;
        Ok(())
    }
}
