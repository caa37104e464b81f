//! State behind the project profile form.
//!
//! A [`FormController`] is mounted once per form instance. Mounting generates
//! the read-only approval code, application id and approval timestamp. Fields
//! are edited one at a time, validation only runs when the caller asks for it
//! (explicitly or by submitting), and a successful submit hands a finalized
//! [`ProjectRecord`] to the caller's completion callback.

use chrono::{DateTime, Utc};
use log::{info, warn};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::models::project::{ApprovalStatus, Field, FieldErrors, ProjectFields, ProjectRecord};
use crate::utils::tokens::TokenGenerator;
use crate::utils::validation::EMAIL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Invalid(FieldErrors),
    AlreadySubmitting,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Invalid(errors) => write!(f, "{} field(s) failed validation", errors.len()),
            FormError::AlreadySubmitting => write!(f, "Form is already being submitted"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug)]
pub struct FormController {
    fields: ProjectFields,
    errors: FieldErrors,
    submitting: bool,
    approval_code: String,
    application_id: String,
    approval_date_time: DateTime<Utc>,
}

impl FormController {
    pub fn new(tokens: &TokenGenerator) -> Self {
        Self::with_fields(tokens, ProjectFields::default())
    }

    pub fn with_fields(tokens: &TokenGenerator, fields: ProjectFields) -> Self {
        let form = Self {
            fields,
            errors: FieldErrors::new(),
            submitting: false,
            approval_code: tokens.approval_code(),
            application_id: tokens.application_id(),
            approval_date_time: Utc::now(),
        };
        info!("Mounted project form {}", form.application_id);
        form
    }

    pub fn fields(&self) -> &ProjectFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn approval_code(&self) -> &str {
        &self.approval_code
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn approval_date_time(&self) -> DateTime<Utc> {
        self.approval_date_time
    }

    /// Edits one field. Any message on that field goes away; the rest stay.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors = match self.fields.validate() {
            Ok(()) => FieldErrors::new(),
            Err(err) => field_messages(&err),
        };
        self.errors.is_empty()
    }

    /// Validates, waits out `delay`, then passes the finalized record to
    /// `on_complete`. Nothing is handed over when validation fails.
    pub async fn submit<F, R>(&mut self, delay: Duration, on_complete: F) -> Result<R, FormError>
    where
        F: FnOnce(ProjectRecord) -> R,
    {
        let record = self.begin_submit()?;
        tokio::time::sleep(delay).await;
        let result = on_complete(record);
        self.submitting = false;
        Ok(result)
    }

    /// Abandons the form.
    pub fn cancel<F: FnOnce()>(self, on_cancel: F) {
        info!("Project form {} abandoned", self.application_id);
        on_cancel();
    }

    fn begin_submit(&mut self) -> Result<ProjectRecord, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if !self.validate() {
            warn!(
                "Project form {} rejected: {:?}",
                self.application_id,
                self.errors.keys().collect::<Vec<_>>()
            );
            return Err(FormError::Invalid(self.errors.clone()));
        }

        self.submitting = true;
        Ok(self.finalize())
    }

    fn finalize(&self) -> ProjectRecord {
        let fields = self.fields.clone();
        ProjectRecord {
            id: Uuid::new_v4(),
            department_name: fields.department_name,
            project_name: fields.project_name,
            project_description: fields.project_description,
            project_owner_name: fields.project_owner_name,
            project_owner_email: fields.project_owner_email,
            project_approval: fields.project_approval,
            project_approval_status: ApprovalStatus::Pending,
            project_approval_code: self.approval_code.clone(),
            application_id: self.application_id.clone(),
            project_approval_date_time: self.approval_date_time,
            created_at: Utc::now(),
        }
    }
}

fn field_messages(err: &ValidationErrors) -> FieldErrors {
    err.field_errors()
        .into_iter()
        .filter_map(|(key, errs)| {
            let field = Field::from_key(key)?;
            let code = errs.first()?.code.as_ref();
            let message = if code == EMAIL {
                "Invalid email format".to_string()
            } else {
                format!("{} is required", field.label())
            };
            Some((field, message))
        })
        .collect()
}
