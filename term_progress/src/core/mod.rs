// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod log;
pub mod osc;
pub mod stack_alloc_types;
pub mod term;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use log::*;
pub use osc::*;
pub use stack_alloc_types::*;
pub use term::*;
pub use terminal_io::*;
pub use test_fixtures::*;
