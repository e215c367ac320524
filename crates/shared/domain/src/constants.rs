//! Domain-level constants.

// =============================================================================
// City
// =============================================================================

/// Entity name used in not-found and conflict messages
pub const CITY_ENTITY: &str = "City";

/// Confirmation returned after a city is removed
pub const CITY_DELETED_MESSAGE: &str = "City deleted";
