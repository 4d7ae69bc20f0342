//! Leaf utilities for step bodies.
//!
//! Pacing and locator-wait helpers with no state or error-handling policy
//! of their own.

mod pacing;
mod waits;

pub use pacing::random_sleep;
pub use waits::{
    click_when_visible, type_when_visible, wait_for_visible, DEFAULT_WAIT_TIMEOUT,
};
