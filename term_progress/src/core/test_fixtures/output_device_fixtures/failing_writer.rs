// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

/// A writer that behaves like stdout after the reading end of the pipe went away: every
/// write and flush fails with [`ErrorKind::BrokenPipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> Result<()> { Err(Error::from(ErrorKind::BrokenPipe)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_writer() {
        let mut it = FailingWriter;
        assert_eq!(
            it.write_all(b"x").unwrap_err().kind(),
            ErrorKind::BrokenPipe
        );
        assert_eq!(it.flush().unwrap_err().kind(), ErrorKind::BrokenPipe);
    }
}
