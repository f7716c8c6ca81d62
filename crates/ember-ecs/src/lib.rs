//! Ember ECS - sparse-set component storage
//!
//! The storage primitive of the Ember engine: one [`ComponentPool`] per
//! component type, mapping entity handles to densely packed values with
//! O(1) insert, lookup, and swap-remove. All pools share the type-erased
//! [`Pool`] capability trait so a registry can hold them behind a single
//! handle. Entity allocation, multi-pool queries, and the registry
//! itself live in higher layers.

mod entity;
mod error;
mod pool;

pub use entity::Entity;
pub use error::EcsError;
pub use pool::{ComponentPool, Pool};
