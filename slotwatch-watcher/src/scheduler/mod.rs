//! Scheduler layer for the watcher
//!
//! This layer owns the timer-driven poll cycle: one attempt at a time,
//! a fixed delay between attempts, and failure isolation so a broken
//! attempt never prevents the next one.

pub mod poller;

pub use poller::Poller;
