//! PostgreSQL-backed `TravelPackageRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::de::DeserializeOwned;

use crate::domain::ports::{TravelPackagePersistenceError, TravelPackageRepository};
use crate::domain::{PackageTitle, TravelPackage, TravelPackageId};

use super::diesel_basic_error_mapping::{DieselFailure, classify_diesel_error, map_basic_pool_error};
use super::models::TravelPackageRow;
use super::pool::{DbPool, PoolError};
use super::schema::travel_packages;

/// Diesel implementation of [`TravelPackageRepository`].
#[derive(Clone)]
pub struct DieselTravelPackageRepository {
    pool: DbPool,
}

impl DieselTravelPackageRepository {
    /// Create a repository on top of `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TravelPackagePersistenceError {
    map_basic_pool_error(error, TravelPackagePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TravelPackagePersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => TravelPackagePersistenceError::connection(message),
        DieselFailure::UniqueViolation(_) => {
            TravelPackagePersistenceError::query("unique constraint violated")
        }
        DieselFailure::Query(message) => TravelPackagePersistenceError::query(message),
    }
}

fn decode_entries<T: DeserializeOwned>(
    column: &str,
    id: &TravelPackageId,
    value: serde_json::Value,
) -> Result<Vec<T>, TravelPackagePersistenceError> {
    serde_json::from_value(value).map_err(|err| {
        TravelPackagePersistenceError::query(format!("package {id} has malformed {column}: {err}"))
    })
}

fn row_to_package(row: TravelPackageRow) -> Result<TravelPackage, TravelPackagePersistenceError> {
    let id = TravelPackageId::from_uuid(row.id);
    let title = PackageTitle::new(row.title).map_err(|err| {
        TravelPackagePersistenceError::query(format!("package {id} is invalid: {err}"))
    })?;
    let review_count = row
        .review_count
        .map(u32::try_from)
        .transpose()
        .map_err(|_| {
            TravelPackagePersistenceError::query(format!("package {id} has a negative review count"))
        })?;
    Ok(TravelPackage {
        itinerary: decode_entries("itinerary", &id, row.itinerary)?,
        reviews: decode_entries("reviews", &id, row.reviews)?,
        faqs: decode_entries("faqs", &id, row.faqs)?,
        id,
        title,
        location: row.location,
        duration: row.duration,
        price: row.price,
        rating: row.rating,
        review_count,
        description: row.description,
        image: row.image,
        highlights: row.highlights,
        inclusions: row.inclusions,
        exclusions: row.exclusions,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl TravelPackageRepository for DieselTravelPackageRepository {
    async fn list_all(&self) -> Result<Vec<TravelPackage>, TravelPackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TravelPackageRow> = travel_packages::table
            .order((travel_packages::title.asc(), travel_packages::id.asc()))
            .select(TravelPackageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_package).collect()
    }

    async fn find_by_id(
        &self,
        id: &TravelPackageId,
    ) -> Result<Option<TravelPackage>, TravelPackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        travel_packages::table
            .find(id.as_uuid())
            .select(TravelPackageRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_package)
            .transpose()
    }
}
