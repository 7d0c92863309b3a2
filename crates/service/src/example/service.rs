use std::sync::Arc;

use tracing::{info, warn, error, instrument};

use crate::auth::domain::Session;
use crate::errors::StoreError;
use super::domain::{AllEnvelope, Greeting, HelloInput, PushInput, PushOutput, Record, ID_MAX_LEN, ID_MIN_LEN, SECRET_MESSAGE};
use super::errors::{ExampleError, LengthViolation};
use super::repository::ExampleRepository;

/// Record operations, independent of any transport. The store is handed in
/// explicitly; nothing here is cached between calls.
pub struct ExampleService<R: ExampleRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ExampleRepository + ?Sized> ExampleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn greet(&self, input: HelloInput) -> Greeting {
        Greeting { greeting: format!("Hello {}", input.text) }
    }

    pub async fn list_all(&self) -> Result<Vec<Record>, ExampleError> {
        let records = self.repo.find_many().await.map_err(store_failure)?;
        info!(count = records.len(), "list examples");
        Ok(records)
    }

    pub async fn list_all_enveloped(&self) -> Result<AllEnvelope, ExampleError> {
        let data = self.list_all().await?;
        Ok(AllEnvelope { status: 200, message: "success".into(), data })
    }

    /// Protected variant: only callers holding a verified session get the message.
    pub fn get_secret(&self, session: Option<&Session>) -> Result<&'static str, ExampleError> {
        match session {
            Some(s) => {
                info!(subject = %s.subject, "secret read");
                Ok(SECRET_MESSAGE)
            }
            None => Err(ExampleError::Unauthorized),
        }
    }

    pub fn get_secret_public(&self) -> &'static str {
        SECRET_MESSAGE
    }

    /// Create a record after trimming and validating its id.
    ///
    /// The existence check runs before the length checks, so an id that is already
    /// stored is reported as `AlreadyExists` whatever its length.
    ///
    /// # Examples
    /// ```
    /// use service::example::{ExampleService, ExampleError, domain::PushInput, repository::mock::MockExampleRepository};
    /// use std::sync::Arc;
    /// let svc = ExampleService::new(Arc::new(MockExampleRepository::default()));
    /// let out = tokio_test::block_on(svc.create_record(PushInput { id: " abcd ".into() })).unwrap();
    /// assert_eq!(out.data.id, "abcd");
    /// let again = tokio_test::block_on(svc.create_record(PushInput { id: "abcd".into() }));
    /// assert!(matches!(again, Err(ExampleError::AlreadyExists)));
    /// ```
    #[instrument(skip(self, input), fields(id = %input.id.trim()))]
    pub async fn create_record(&self, input: PushInput) -> Result<PushOutput, ExampleError> {
        let id = input.id.trim();

        if self.repo.find_by_key(id).await.map_err(store_failure)?.is_some() {
            common::metrics::record_create_rejected("already_exists");
            info!("create rejected: id already exists");
            return Err(ExampleError::AlreadyExists);
        }

        let len = id.chars().count();
        if len < ID_MIN_LEN {
            common::metrics::record_create_rejected("too_short");
            return Err(ExampleError::InvalidLength(LengthViolation::TooShort));
        }
        if len > ID_MAX_LEN {
            common::metrics::record_create_rejected("too_long");
            return Err(ExampleError::InvalidLength(LengthViolation::TooLong));
        }

        let created = match self.repo.create(id).await {
            Ok(record) => record,
            Err(StoreError::ConstraintViolation(detail)) => {
                // Another writer inserted the same id after our lookup.
                warn!(%detail, "create lost race on unique id");
                common::metrics::record_create_rejected("already_exists");
                return Err(ExampleError::AlreadyExists);
            }
            Err(e) => return Err(store_failure(e)),
        };

        common::metrics::record_created();
        info!(id = %created.id, "example created");
        Ok(PushOutput::ok(created.id))
    }
}

fn store_failure(e: StoreError) -> ExampleError {
    error!(err = %e, "record store failure");
    ExampleError::Store(e.to_string())
}
