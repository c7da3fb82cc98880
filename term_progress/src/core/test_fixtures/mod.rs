// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for testing code that reports progress, without a real terminal.

// Attach sources.
pub mod mock_terminal;
pub mod output_device_fixtures;

// Re-export.
pub use mock_terminal::*;
pub use output_device_fixtures::*;
