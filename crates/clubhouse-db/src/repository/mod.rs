//! Repository layer — query functions organized by domain.

pub mod clubs;
pub mod events;
pub mod users;
