// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{FailingWriter, OutputDevice, StdMutex, StdoutMock};

pub trait OutputDeviceExt {
    /// An output device whose bytes are captured by the returned [`StdoutMock`].
    fn new_mock() -> (OutputDevice, StdoutMock);

    /// An output device whose every write and flush fails. See [`FailingWriter`].
    fn new_failing() -> OutputDevice;
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }

    fn new_failing() -> OutputDevice {
        OutputDevice {
            resource: Arc::new(StdMutex::new(FailingWriter)),
            is_mock: true,
        }
    }
}
