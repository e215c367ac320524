//! Application services layer - City use cases.

mod city_service;

pub use city_service::{CityManager, CityService};
