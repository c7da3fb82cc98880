// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The longest progress sequence is `ESC ] 9 ; 4 ; 1 ; 1 0 0 ESC \` which is 13 bytes,
//! so every sequence this crate emits fits on the stack.

use smallstr::SmallString;
use smallvec::SmallVec;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
