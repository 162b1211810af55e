use async_trait::async_trait;
use models::auto;

use super::domain::{AutoChanges, NewAuto};
use crate::errors::ServiceError;

/// Persistence for autos. Every call is one unit of work: it either commits
/// fully or leaves storage untouched.
#[async_trait]
pub trait AutoRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<auto::Model>, ServiceError>;
    async fn get(&self, auto_id: i32) -> Result<Option<auto::Model>, ServiceError>;
    async fn create(&self, new: NewAuto) -> Result<auto::Model, ServiceError>;
    /// Fails with `NotFound` when the row does not exist.
    async fn update(&self, auto_id: i32, changes: AutoChanges) -> Result<auto::Model, ServiceError>;
    /// Fails with `NotFound` when the row does not exist.
    async fn delete(&self, auto_id: i32) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAutoRepository {
        rows: Mutex<BTreeMap<i32, auto::Model>>,
        next_id: Mutex<i32>,
        failing: bool,
    }

    impl MockAutoRepository {
        /// Repository whose every call fails with a database error.
        pub fn failing() -> Self {
            Self { failing: true, ..Default::default() }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }

        pub fn len(&self) -> usize { self.rows.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl AutoRepository for MockAutoRepository {
        async fn list(&self) -> Result<Vec<auto::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, auto_id: i32) -> Result<Option<auto::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&auto_id).cloned())
        }

        async fn create(&self, new: NewAuto) -> Result<auto::Model, ServiceError> {
            self.check()?;
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let m = auto::Model { auto_id: *next, parking_name: new.parking_name, parking_price: new.parking_price };
            self.rows.lock().unwrap().insert(m.auto_id, m.clone());
            Ok(m)
        }

        async fn update(&self, auto_id: i32, changes: AutoChanges) -> Result<auto::Model, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let m = rows.get_mut(&auto_id).ok_or_else(|| ServiceError::not_found("auto"))?;
            changes.apply_to_model(m);
            Ok(m.clone())
        }

        async fn delete(&self, auto_id: i32) -> Result<(), ServiceError> {
            self.check()?;
            self.rows
                .lock()
                .unwrap()
                .remove(&auto_id)
                .map(|_| ())
                .ok_or_else(|| ServiceError::not_found("auto"))
        }
    }
}
