use crate::{
    config::AppConfig,
    models::{ExampleRequest, FieldError},
    validation::RequestValidator,
};
use std::sync::Arc;
use tracing::instrument;

/// Request handler for the `/example` resource
pub struct ExampleHandler {
    validator: Arc<RequestValidator>,
}

impl ExampleHandler {
    /// Create a new handler with the validation registry built up front
    pub fn new(_config: &AppConfig) -> Self {
        Self {
            validator: Arc::new(RequestValidator::new()),
        }
    }

    /// Fetch an example record by id.
    ///
    /// Only id 1 exists; the returned record is server-constructed and does
    /// not pass back through validation.
    #[instrument(skip(self))]
    pub fn get_example(&self, id: i64) -> Option<ExampleRequest> {
        if id == 1 {
            Some(ExampleRequest::named("Example1"))
        } else {
            None
        }
    }

    /// Validate and accept a new example record.
    ///
    /// Runs every attached rule across every field and aggregates all
    /// violations. The stub neither persists nor echoes the record.
    #[instrument(skip(self, request))]
    pub fn create_example(&self, request: &ExampleRequest) -> Result<(), Vec<FieldError>> {
        let errors = self.validator.validate(request);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
