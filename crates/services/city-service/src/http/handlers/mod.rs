//! HTTP request handlers.

pub mod city_handler;
pub mod health_handler;

pub use city_handler::city_routes;
pub use health_handler::health_routes;
