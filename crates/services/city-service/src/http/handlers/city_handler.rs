//! City handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::{CityResponse, CreateCity, MessageResponse, UpdateCity};

use crate::http::extractors::{JsonBody, PathParam};
use crate::http::state::AppState;

/// City create/update request. Both fields are required; values are stored as given.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CityRequest {
    /// City name
    #[schema(example = "Paris")]
    pub name: String,
    /// Freeform description
    #[schema(example = "capital")]
    pub additional_info: String,
}

impl From<CityRequest> for CreateCity {
    fn from(req: CityRequest) -> Self {
        CreateCity::new(req.name, req.additional_info)
    }
}

impl From<CityRequest> for UpdateCity {
    fn from(req: CityRequest) -> Self {
        UpdateCity::new(req.name, req.additional_info)
    }
}

/// Create city routes
pub fn city_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cities).post(create_city))
        .route("/by-name/:name", get(get_city_by_name))
        .route("/:id", get(get_city).put(update_city).delete(delete_city))
}

/// List all cities
#[utoipa::path(
    get,
    path = "/cities",
    tag = "Cities",
    responses(
        (status = 200, description = "List of all cities", body = Vec<CityResponse>)
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<Vec<CityResponse>>> {
    let cities = state.city_service.list_cities().await?;
    Ok(Json(cities.into_iter().map(CityResponse::from).collect()))
}

/// Get city by ID
#[utoipa::path(
    get,
    path = "/cities/{id}",
    tag = "Cities",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City details", body = CityResponse),
        (status = 400, description = "Invalid city ID"),
        (status = 404, description = "City not found")
    )
)]
pub async fn get_city(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<CityResponse>> {
    let city = state.city_service.get_city(id).await?;
    Ok(Json(CityResponse::from(city)))
}

/// Get city by name
#[utoipa::path(
    get,
    path = "/cities/by-name/{name}",
    tag = "Cities",
    params(
        ("name" = String, Path, description = "City name")
    ),
    responses(
        (status = 200, description = "First city with this name", body = CityResponse),
        (status = 404, description = "City not found")
    )
)]
pub async fn get_city_by_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> AppResult<Json<CityResponse>> {
    let city = state.city_service.find_city_by_name(&name).await?;
    Ok(Json(CityResponse::from(city)))
}

/// Create a new city
#[utoipa::path(
    post,
    path = "/cities",
    tag = "Cities",
    request_body = CityRequest,
    responses(
        (status = 201, description = "City created successfully", body = CityResponse),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "City already exists")
    )
)]
pub async fn create_city(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CityRequest>,
) -> AppResult<(StatusCode, Json<CityResponse>)> {
    let city = state.city_service.create_city(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(CityResponse::from(city))))
}

/// Replace a city's name and additional info
#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = "Cities",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body = CityRequest,
    responses(
        (status = 200, description = "City updated successfully", body = CityResponse),
        (status = 400, description = "Malformed body or missing field"),
        (status = 404, description = "City not found")
    )
)]
pub async fn update_city(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<CityRequest>,
) -> AppResult<Json<CityResponse>> {
    let city = state.city_service.update_city(id, payload.into()).await?;
    Ok(Json(CityResponse::from(city)))
}

/// Delete a city
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = "Cities",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid city ID"),
        (status = 404, description = "City not found")
    )
)]
pub async fn delete_city(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<MessageResponse>> {
    let response = state.city_service.delete_city(id).await?;
    Ok(Json(response))
}
