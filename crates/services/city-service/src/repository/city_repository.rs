//! City repository implementation.
//!
//! Reads go straight to the pooled connection. Every write runs in its own
//! transaction that is committed as soon as its statement succeeds. Updates
//! and deletes filter by id in a single statement, so a row removed
//! concurrently surfaces as not found.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

use super::entities::city::{self, ActiveModel, Entity as CityEntity};
use common::AppResult;
use domain::{City, CreateCity, DomainError, MessageResponse, UpdateCity, CITY_ENTITY};

#[cfg(test)]
use mockall::automock;

/// City repository trait for dependency injection.
///
/// Lookups report absence as `None`. Only `update` and `delete` turn a
/// missing id into `AppError::NotFound`, and in that case nothing is written.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// List every city in storage order
    async fn list_all(&self) -> AppResult<Vec<City>>;

    /// Find city by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Option<City>>;

    /// Find the first city with the given name
    async fn get_by_name(&self, name: &str) -> AppResult<Option<City>>;

    /// Insert a new city and return it with its assigned id
    async fn create(&self, input: CreateCity) -> AppResult<City>;

    /// Overwrite name and additional info of an existing city
    async fn update(&self, id: i32, input: UpdateCity) -> AppResult<City>;

    /// Delete city by ID
    async fn delete(&self, id: i32) -> AppResult<MessageResponse>;
}

/// Concrete implementation of CityRepository
pub struct CityStore {
    db: DatabaseConnection,
}

impl CityStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Commit when the statement touched a row, otherwise roll back and report not found.
async fn commit_if_found(txn: DatabaseTransaction, rows_affected: u64) -> AppResult<()> {
    if rows_affected == 0 {
        txn.rollback().await?;
        return Err(DomainError::not_found(CITY_ENTITY).into());
    }

    txn.commit().await?;
    Ok(())
}

#[async_trait]
impl CityRepository for CityStore {
    async fn list_all(&self) -> AppResult<Vec<City>> {
        let models = CityEntity::find().all(&self.db).await?;

        Ok(models.into_iter().map(City::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<City>> {
        let result = CityEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(City::from))
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Option<City>> {
        // Duplicate names are not rejected here; `one` takes whichever row comes first
        let result = CityEntity::find()
            .filter(city::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(result.map(City::from))
    }

    async fn create(&self, input: CreateCity) -> AppResult<City> {
        let active_model = ActiveModel {
            name: Set(input.name.clone()),
            additional_info: Set(input.additional_info.clone()),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = CityEntity::insert(active_model).exec(&txn).await?;
        txn.commit().await?;

        Ok(input.into_city(result.last_insert_id))
    }

    async fn update(&self, id: i32, input: UpdateCity) -> AppResult<City> {
        let txn = self.db.begin().await?;
        let result = CityEntity::update_many()
            .col_expr(city::Column::Name, Expr::value(input.name.clone()))
            .col_expr(
                city::Column::AdditionalInfo,
                Expr::value(input.additional_info.clone()),
            )
            .filter(city::Column::Id.eq(id))
            .exec(&txn)
            .await?;
        commit_if_found(txn, result.rows_affected).await?;

        // Built from the input rather than re-read from storage
        Ok(input.into_city(id))
    }

    async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        let txn = self.db.begin().await?;
        let result = CityEntity::delete_by_id(id).exec(&txn).await?;
        commit_if_found(txn, result.rows_affected).await?;

        Ok(MessageResponse::city_deleted())
    }
}
