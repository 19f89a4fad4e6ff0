//! Storage layer for OPTATV
//!
//! This crate provides the local key-value storage that display preferences
//! are persisted to.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{open_or_memory, KvConfig, KvError, KvStore, LocalStorage, MemoryStorage, Result};
