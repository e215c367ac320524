//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared between the repository, service and HTTP layers.

pub mod city;
pub mod constants;
pub mod error;

pub use city::{City, CityResponse, CreateCity, MessageResponse, UpdateCity};
pub use constants::*;
pub use error::DomainError;
