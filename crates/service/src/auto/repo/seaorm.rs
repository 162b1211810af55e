use models::auto;
use sea_orm::{ActiveModelTrait, DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::auto::domain::{AutoChanges, NewAuto};
use crate::auto::repository::AutoRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository. Each method opens a transaction, commits on
/// success and lets the guard roll back on every early return.
#[derive(Clone)]
pub struct SeaOrmAutoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAutoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl AutoRepository for SeaOrmAutoRepository {
    async fn list(&self) -> Result<Vec<auto::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let rows = auto::list(&txn).await?;
        txn.commit().await?;
        Ok(rows)
    }

    async fn get(&self, auto_id: i32) -> Result<Option<auto::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let found = auto::find(&txn, auto_id).await?;
        txn.commit().await?;
        Ok(found)
    }

    async fn create(&self, new: NewAuto) -> Result<auto::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let created = auto::create(&txn, new.parking_name, new.parking_price).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update(&self, auto_id: i32, changes: AutoChanges) -> Result<auto::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = auto::find(&txn, auto_id).await? else {
            return Err(ServiceError::not_found("auto"));
        };
        let mut am: auto::ActiveModel = existing.clone().into();
        changes.apply(&mut am);
        let updated = if am.is_changed() {
            am.update(&txn).await?
        } else {
            debug!(auto_id, "update carried no fields");
            existing
        };
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, auto_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        if auto::find(&txn, auto_id).await?.is_none() {
            return Err(ServiceError::not_found("auto"));
        }
        auto::delete(&txn, auto_id).await?;
        txn.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn auto_crud_repository() -> Result<(), anyhow::Error> {
        let test_db = get_db().await?;
        let repo = SeaOrmAutoRepository::new(test_db.db.clone());

        assert!(repo.list().await?.is_empty());

        let a = repo
            .create(NewAuto { parking_name: Some("Test Parking".into()), parking_price: Some(5.0) })
            .await?;
        assert_eq!(a.auto_id, 1);

        let found = repo.get(a.auto_id).await?.unwrap();
        assert_eq!(found.parking_name.as_deref(), Some("Test Parking"));

        let updated = repo
            .update(a.auto_id, AutoChanges { parking_price: Some(Some(15.0)), ..Default::default() })
            .await?;
        assert_eq!(updated.parking_name.as_deref(), Some("Test Parking"));
        assert_eq!(updated.parking_price, Some(15.0));

        let unchanged = repo.update(a.auto_id, AutoChanges::default()).await?;
        assert_eq!(unchanged, updated);

        repo.delete(a.auto_id).await?;
        assert!(repo.get(a.auto_id).await?.is_none());
        assert!(repo.delete(a.auto_id).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let test_db = get_db().await?;
        let repo = SeaOrmAutoRepository::new(test_db.db.clone());
        let err = repo
            .update(999, AutoChanges { parking_name: Some(Some("x".into())), ..Default::default() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn null_overwrites_stored_value() -> Result<(), anyhow::Error> {
        let test_db = get_db().await?;
        let repo = SeaOrmAutoRepository::new(test_db.db.clone());
        let a = repo
            .create(NewAuto { parking_name: Some("Lot".into()), parking_price: Some(2.0) })
            .await?;
        let updated = repo
            .update(a.auto_id, AutoChanges { parking_name: Some(None), ..Default::default() })
            .await?;
        assert_eq!(updated.parking_name, None);
        assert_eq!(repo.get(a.auto_id).await?.unwrap().parking_price, Some(2.0));
        Ok(())
    }
}
