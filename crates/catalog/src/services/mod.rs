//! Entity CRUD services with fail-fast validation.
//!
//! Ownership and cross-entity relationship checks run before any mutation is
//! issued; deletion flows live in the cascade and trash modules, not here.

pub mod inventories;
pub mod objects;
pub mod shelves;
