use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::StoreError;
use super::domain::Record;

/// Persistence contract for records. Implementations must be safe to share
/// between concurrent requests.
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// All records, order unspecified.
    async fn find_many(&self) -> Result<Vec<Record>, StoreError>;
    async fn find_by_key(&self, id: &str) -> Result<Option<Record>, StoreError>;
    /// Insert a new record; `StoreError::ConstraintViolation` if `id` is taken.
    async fn create(&self, id: &str) -> Result<Record, StoreError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmExampleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmExampleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ExampleRepository for SeaOrmExampleRepository {
    async fn find_many(&self) -> Result<Vec<Record>, StoreError> {
        Ok(models::example::find_all(&self.db).await?)
    }

    async fn find_by_key(&self, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(models::example::find_by_id(&self.db, id).await?)
    }

    async fn create(&self, id: &str) -> Result<Record, StoreError> {
        Ok(models::example::create(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;

    #[derive(Default)]
    pub struct MockExampleRepository {
        records: Mutex<HashMap<String, Record>>, // key: id
    }

    impl MockExampleRepository {
        pub fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl ExampleRepository for MockExampleRepository {
        async fn find_many(&self) -> Result<Vec<Record>, StoreError> {
            let records = self.records.lock().unwrap();
            Ok(records.values().cloned().collect())
        }

        async fn find_by_key(&self, id: &str) -> Result<Option<Record>, StoreError> {
            let records = self.records.lock().unwrap();
            Ok(records.get(id).cloned())
        }

        async fn create(&self, id: &str) -> Result<Record, StoreError> {
            let mut records = self.records.lock().unwrap();
            if records.contains_key(id) {
                return Err(StoreError::ConstraintViolation(format!("example.id = {id}")));
            }
            let now = Utc::now().into();
            let record = Record { id: id.to_string(), created_at: now, updated_at: now };
            records.insert(id.to_string(), record.clone());
            Ok(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> anyhow::Result<()> {
        let repo = SeaOrmExampleRepository::new(get_db().await?);
        assert!(repo.find_many().await?.is_empty());

        let created = repo.create("abc").await?;
        assert_eq!(created.id, "abc");
        assert_eq!(repo.find_by_key("abc").await?.map(|r| r.id), Some("abc".into()));
        assert!(repo.find_by_key("nope").await?.is_none());
        assert_eq!(repo.find_many().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_reports_constraint_violation() -> anyhow::Result<()> {
        let repo = SeaOrmExampleRepository::new(get_db().await?);
        repo.create("abc").await?;
        let err = repo.create("abc").await.unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation(_)), "unexpected: {err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn mock_repository_matches_contract() -> anyhow::Result<()> {
        let repo = mock::MockExampleRepository::default();
        repo.create("abc").await?;
        assert!(matches!(repo.create("abc").await, Err(StoreError::ConstraintViolation(_))));
        assert_eq!(repo.len(), 1);
        Ok(())
    }
}
