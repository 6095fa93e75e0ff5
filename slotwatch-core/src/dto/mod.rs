//! Wire representations of provider responses
//!
//! DTOs for the scheduling provider's JSON endpoints. These are lightweight
//! decode targets; conversion into domain types happens at the boundary.

pub mod appointment;
