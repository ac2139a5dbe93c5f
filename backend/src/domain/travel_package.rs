//! Travel package documents.
//!
//! A package is a read-mostly document: a required title, a handful of
//! optional scalar facts, and ordered lists of highlights, itinerary days,
//! reviews and FAQs. List order is meaningful and preserved end to end.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised by travel package constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TravelPackageValidationError {
    /// The identifier was not a UUID.
    #[error("travel package id must be a valid UUID")]
    InvalidId,
    /// The title was empty once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Stable travel package identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TravelPackageId(Uuid);

impl TravelPackageId {
    /// Parse the hyphenated string form.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::TravelPackageId;
    ///
    /// assert!(TravelPackageId::new("5c1d6a7e-0000-4000-8000-000000000001").is_ok());
    /// assert!(TravelPackageId::new("bali").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, TravelPackageValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| TravelPackageValidationError::InvalidId)
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TravelPackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<TravelPackageId> for String {
    fn from(value: TravelPackageId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TravelPackageId {
    type Error = TravelPackageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Package title; the only required field of a package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageTitle(String);

impl PackageTitle {
    /// Trim and validate a title.
    pub fn new(title: impl Into<String>) -> Result<Self, TravelPackageValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TravelPackageValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PackageTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PackageTitle> for String {
    fn from(value: PackageTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for PackageTitle {
    type Error = TravelPackageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One day of a package itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDay {
    pub day: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub activities: Vec<String>,
}

/// Traveller review attached to a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageReview {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    /// Free-form date string, kept as supplied.
    pub date: Option<String>,
}

/// Frequently asked question and its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// A bookable travel package.
///
/// Serialised with camelCase keys (`reviewCount`, `createdAt`, ...). Absent
/// scalars serialise as `null`; lists serialise as arrays, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub id: TravelPackageId,
    pub title: PackageTitle,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<PackageReview>,
    #[serde(default)]
    pub faqs: Vec<PackageFaq>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TravelPackage {
    /// Start a package with only its required fields set.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::{PackageTitle, TravelPackage, TravelPackageId};
    ///
    /// let title = PackageTitle::new("Bali Escape").expect("title");
    /// let package = TravelPackage::new(TravelPackageId::random(), title);
    /// assert!(package.itinerary.is_empty());
    /// assert_eq!(package.created_at, package.updated_at);
    /// ```
    pub fn new(id: TravelPackageId, title: PackageTitle) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            location: None,
            duration: None,
            price: None,
            rating: None,
            review_count: None,
            description: None,
            image: None,
            highlights: Vec::new(),
            itinerary: Vec::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            reviews: Vec::new(),
            faqs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sort packages into listing order: by title, then by id.
pub fn sort_for_listing(packages: &mut [TravelPackage]) {
    packages.sort_by(|a, b| {
        a.title
            .cmp(&b.title)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
}

#[cfg(test)]
mod tests;
