//! In-memory `TravelPackageRepository`.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{TravelPackagePersistenceError, TravelPackageRepository};
use crate::domain::{TravelPackage, TravelPackageId, sort_for_listing};

/// Package store backed by a locked vector.
#[derive(Debug, Default)]
pub struct InMemoryTravelPackageRepository {
    packages: RwLock<Vec<TravelPackage>>,
}

fn poisoned() -> TravelPackagePersistenceError {
    TravelPackagePersistenceError::connection("in-memory package store lock poisoned")
}

impl InMemoryTravelPackageRepository {
    /// Seed the store with `packages`.
    pub fn with_packages(packages: impl IntoIterator<Item = TravelPackage>) -> Self {
        Self {
            packages: RwLock::new(packages.into_iter().collect()),
        }
    }
}

#[async_trait]
impl TravelPackageRepository for InMemoryTravelPackageRepository {
    async fn list_all(&self) -> Result<Vec<TravelPackage>, TravelPackagePersistenceError> {
        let mut packages = self.packages.read().map_err(|_| poisoned())?.clone();
        sort_for_listing(&mut packages);
        Ok(packages)
    }

    async fn find_by_id(
        &self,
        id: &TravelPackageId,
    ) -> Result<Option<TravelPackage>, TravelPackagePersistenceError> {
        let packages = self.packages.read().map_err(|_| poisoned())?;
        Ok(packages.iter().find(|package| package.id == *id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PackageTitle;
    use rstest::rstest;

    fn package(title: &str) -> TravelPackage {
        TravelPackage::new(
            TravelPackageId::random(),
            PackageTitle::new(title).expect("title"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn lists_in_title_order() {
        let repo = InMemoryTravelPackageRepository::with_packages([
            package("Zermatt"),
            package("Amalfi"),
        ]);

        let titles: Vec<String> = repo
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.title.as_ref().to_owned())
            .collect();

        assert_eq!(titles, vec!["Amalfi", "Zermatt"]);
    }

    #[rstest]
    #[tokio::test]
    async fn finds_by_id() {
        let wanted = package("Amalfi");
        let repo = InMemoryTravelPackageRepository::with_packages([wanted.clone()]);

        assert_eq!(repo.find_by_id(&wanted.id).await.expect("find"), Some(wanted));
        assert_eq!(
            repo.find_by_id(&TravelPackageId::random()).await.expect("find"),
            None
        );
    }
}
