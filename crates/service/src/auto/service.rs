use std::sync::Arc;

use models::auto;
use tracing::{info, instrument};

use super::domain::{AutoChanges, CreateAutoInput};
use super::repository::AutoRepository;
use crate::errors::ServiceError;

/// Auto business service independent of web framework.
///
/// Defaults to a type-erased repository so the HTTP layer can hold one
/// concrete service type regardless of the storage behind it.
pub struct AutoService<R: AutoRepository + ?Sized = dyn AutoRepository> {
    repo: Arc<R>,
}

impl<R: AutoRepository + ?Sized> AutoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<auto::Model>, ServiceError> {
        let autos = self.repo.list().await?;
        info!(count = autos.len(), "retrieved autos");
        Ok(autos)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, auto_id: i32) -> Result<auto::Model, ServiceError> {
        let found = self.repo.get(auto_id).await?.ok_or_else(|| ServiceError::not_found("auto"))?;
        info!(?found, "retrieved auto");
        Ok(found)
    }

    /// Validate the body, then insert.
    ///
    /// # Examples
    /// ```
    /// use service::auto::{AutoService, domain::CreateAutoInput, repository::mock::MockAutoRepository};
    /// use std::sync::Arc;
    /// let svc = AutoService::new(Arc::new(MockAutoRepository::default()));
    /// let input = CreateAutoInput { parking_name: Some(Some("Test Parking".into())), parking_price: Some(Some(5.0)) };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.auto_id, 1);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateAutoInput) -> Result<auto::Model, ServiceError> {
        let new = input.validate()?;
        let created = self.repo.create(new).await?;
        info!(?created, "created new auto");
        Ok(created)
    }

    /// `PUT`: present keys overwrite, absent keys keep their stored value.
    #[instrument(skip(self, changes))]
    pub async fn replace(&self, auto_id: i32, changes: AutoChanges) -> Result<auto::Model, ServiceError> {
        let updated = self.repo.update(auto_id, changes).await?;
        info!(?updated, "updated auto");
        Ok(updated)
    }

    /// `PATCH`: only keys present in the body are applied.
    #[instrument(skip(self, changes))]
    pub async fn patch(&self, auto_id: i32, changes: AutoChanges) -> Result<auto::Model, ServiceError> {
        let updated = self.repo.update(auto_id, changes).await?;
        info!(?updated, "partially updated auto");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, auto_id: i32) -> Result<(), ServiceError> {
        self.repo.delete(auto_id).await?;
        info!("deleted auto");
        Ok(())
    }
}
