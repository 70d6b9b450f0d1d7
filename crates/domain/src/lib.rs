//! Domain layer for NearStop
//!
//! Contains the value objects and entities that flow through the
//! place → coordinates → nearest stop pipeline. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
