//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{travel_packages, users};

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// Partial update for a profile write. `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub picture: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// Row read from the travel_packages table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = travel_packages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TravelPackageRow {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub highlights: Vec<String>,
    pub itinerary: serde_json::Value,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub reviews: serde_json::Value,
    pub faqs: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
