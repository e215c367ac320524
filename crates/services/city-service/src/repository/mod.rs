//! Repository layer for data access.

pub mod entities;
mod city_repository;

pub use city_repository::{CityRepository, CityStore};

#[cfg(test)]
pub use city_repository::MockCityRepository;
