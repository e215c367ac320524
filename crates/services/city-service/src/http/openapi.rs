//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::http::handlers::city_handler::CityRequest;
use domain::{CityResponse, MessageResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "City Service",
        version = "0.1.0",
        description = "CRUD API for cities backed by SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::http::handlers::city_handler::list_cities,
        crate::http::handlers::city_handler::get_city,
        crate::http::handlers::city_handler::get_city_by_name,
        crate::http::handlers::city_handler::create_city,
        crate::http::handlers::city_handler::update_city,
        crate::http::handlers::city_handler::delete_city,
    ),
    components(
        schemas(
            CityRequest,
            CityResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Cities", description = "City management endpoints"),
    )
)]
pub struct ApiDoc;
