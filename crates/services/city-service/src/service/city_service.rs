//! City service - Handles city-related business logic.
//!
//! SOLID (SRP): Handles city use cases only; persistence stays in the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{City, CreateCity, DomainError, MessageResponse, UpdateCity, CITY_ENTITY};

use crate::repository::CityRepository;

/// City service trait for dependency injection.
#[async_trait]
pub trait CityService: Send + Sync {
    /// List all cities
    async fn list_cities(&self) -> AppResult<Vec<City>>;

    /// Get city by ID
    async fn get_city(&self, id: i32) -> AppResult<City>;

    /// Get the first city with the given name
    async fn find_city_by_name(&self, name: &str) -> AppResult<City>;

    /// Create a new city (rejects a name that is already taken)
    async fn create_city(&self, input: CreateCity) -> AppResult<City>;

    /// Replace name and additional info of a city
    async fn update_city(&self, id: i32, input: UpdateCity) -> AppResult<City>;

    /// Delete a city
    async fn delete_city(&self, id: i32) -> AppResult<MessageResponse>;
}

/// Concrete implementation of CityService using repository.
pub struct CityManager {
    repo: Arc<dyn CityRepository>,
}

impl CityManager {
    /// Create new city service instance with repository
    pub fn new(repo: Arc<dyn CityRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CityService for CityManager {
    async fn list_cities(&self) -> AppResult<Vec<City>> {
        self.repo.list_all().await
    }

    async fn get_city(&self, id: i32) -> AppResult<City> {
        tracing::debug!(id, "Looking up city");
        self.repo.get_by_id(id).await?.ok_or_not_found(CITY_ENTITY)
    }

    async fn find_city_by_name(&self, name: &str) -> AppResult<City> {
        tracing::debug!(name, "Looking up city by name");
        self.repo.get_by_name(name).await?.ok_or_not_found(CITY_ENTITY)
    }

    async fn create_city(&self, input: CreateCity) -> AppResult<City> {
        // Check if name already exists
        if self.repo.get_by_name(&input.name).await?.is_some() {
            return Err(DomainError::conflict(CITY_ENTITY).into());
        }

        let city = self.repo.create(input).await?;
        tracing::info!(id = city.id, name = %city.name, "City created");
        Ok(city)
    }

    async fn update_city(&self, id: i32, input: UpdateCity) -> AppResult<City> {
        let city = self.repo.update(id, input).await?;
        tracing::info!(id, "City updated");
        Ok(city)
    }

    async fn delete_city(&self, id: i32) -> AppResult<MessageResponse> {
        let response = self.repo.delete(id).await?;
        tracing::info!(id, "City deleted");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCityRepository;
    use common::AppError;
    use mockall::predicate::eq;

    fn paris(id: i32) -> City {
        CreateCity::new("Paris", "capital").into_city(id)
    }

    fn manager(repo: MockCityRepository) -> CityManager {
        CityManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_city_success() {
        let mut repo = MockCityRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(paris(id))));

        let city = manager(repo).get_city(1).await.unwrap();
        assert_eq!(city.name, "Paris");
    }

    #[tokio::test]
    async fn test_get_city_absent_is_not_found() {
        let mut repo = MockCityRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let err = manager(repo).get_city(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref entity) if entity == "City"));
    }

    #[tokio::test]
    async fn test_find_city_by_name_absent_is_not_found() {
        let mut repo = MockCityRepository::new();
        repo.expect_get_by_name().returning(|_| Ok(None));

        let err = manager(repo).find_city_by_name("Atlantis").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_city_success() {
        let mut repo = MockCityRepository::new();
        repo.expect_get_by_name().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .with(eq(CreateCity::new("Paris", "capital")))
            .times(1)
            .returning(|input| Ok(input.into_city(1)));

        let city = manager(repo)
            .create_city(CreateCity::new("Paris", "capital"))
            .await
            .unwrap();
        assert_eq!(city, paris(1));
    }

    #[tokio::test]
    async fn test_create_city_duplicate_name_conflicts() {
        let mut repo = MockCityRepository::new();
        repo.expect_get_by_name().returning(|_| Ok(Some(paris(1))));
        repo.expect_create().never();

        let err = manager(repo)
            .create_city(CreateCity::new("Paris", "again"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_city_passes_through_not_found() {
        let mut repo = MockCityRepository::new();
        repo.expect_update()
            .returning(|_, _| Err(AppError::not_found("City")));

        let err = manager(repo)
            .update_city(9, UpdateCity::new("Paris", "city of light"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_city_returns_input_values() {
        let mut repo = MockCityRepository::new();
        repo.expect_update()
            .with(eq(1), eq(UpdateCity::new("Paris", "city of light")))
            .returning(|id, input| Ok(input.into_city(id)));

        let city = manager(repo)
            .update_city(1, UpdateCity::new("Paris", "city of light"))
            .await
            .unwrap();
        assert_eq!(city.additional_info, "city of light");
    }

    #[tokio::test]
    async fn test_delete_city_success() {
        let mut repo = MockCityRepository::new();
        repo.expect_delete()
            .with(eq(1))
            .returning(|_| Ok(MessageResponse::city_deleted()));

        let response = manager(repo).delete_city(1).await.unwrap();
        assert_eq!(response.message, "City deleted");
    }
}
