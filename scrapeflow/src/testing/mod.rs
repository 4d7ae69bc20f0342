//! Testing utilities for scrapeflow pipelines.
//!
//! This module provides recording doubles for every external seam: the
//! driver session and backend, notifiers, and failure hooks. Each double
//! keeps its records behind a shared handle, so assertions survive the
//! consuming `build()` and `run()` calls.

pub mod mocks;

pub use mocks::{
    CollectingNotifier, DriverCall, HookInvocation, MockBackend, MockDriver, RecordingHook,
};
