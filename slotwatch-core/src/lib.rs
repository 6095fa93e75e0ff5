//! Slotwatch Core
//!
//! Core types for the slotwatch appointment watcher.
//!
//! This crate contains:
//! - Domain types: Core business entities (Location, Appointment, CheckOutcome)
//! - DTOs: Wire representations of the scheduling provider's responses

pub mod domain;
pub mod dto;
