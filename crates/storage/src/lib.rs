//! Storage layer for Pawtrail
//!
//! This crate provides the key-value persistence capability used for
//! device-level preferences, with an on-disk implementation for hosts
//! with durable storage and an in-memory fallback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvError, MemoryPreferenceStore, PreferenceStore, SledPreferenceStore};
