//! Core domain types
//!
//! This module contains the domain structures shared across the slotwatch
//! crates. These types represent the fundamental entities of the watcher:
//! consular locations, discovered appointments, and check outcomes.

pub mod appointment;
pub mod location;
pub mod outcome;
