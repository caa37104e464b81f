use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_email_shape, validate_not_blank};

/// Departments offered by the form. Free text is still accepted.
pub const DEPARTMENT_CHOICES: [&str; 10] = [
    "Depart A",
    "Depart B",
    "Engineering",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "IT",
    "Research & Development",
];

/// Approvers offered by the form.
pub const APPROVER_CHOICES: [&str; 6] = [
    "John Smith - Engineering Manager",
    "Sarah Johnson - Marketing Director",
    "Mike Davis - CTO",
    "Lisa Wilson - VP Engineering",
    "David Brown - Operations Manager",
    "Emily Chen - Finance Director",
];

/// Field name to human-readable message.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    DepartmentName,
    ProjectName,
    ProjectDescription,
    ProjectOwnerName,
    ProjectOwnerEmail,
    ProjectApproval,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::DepartmentName,
        Field::ProjectName,
        Field::ProjectDescription,
        Field::ProjectOwnerName,
        Field::ProjectOwnerEmail,
        Field::ProjectApproval,
    ];

    /// Name of the matching `ProjectFields` member, as reported by `validator`.
    pub fn key(self) -> &'static str {
        match self {
            Field::DepartmentName => "department_name",
            Field::ProjectName => "project_name",
            Field::ProjectDescription => "project_description",
            Field::ProjectOwnerName => "project_owner_name",
            Field::ProjectOwnerEmail => "project_owner_email",
            Field::ProjectApproval => "project_approval",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::DepartmentName => "Department name",
            Field::ProjectName => "Project name",
            Field::ProjectDescription => "Project description",
            Field::ProjectOwnerName => "Project owner name",
            Field::ProjectOwnerEmail => "Project owner email",
            Field::ProjectApproval => "Project approver",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The editable part of the project profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFields {
    #[validate(custom = "validate_not_blank")]
    pub department_name: String,
    #[validate(custom = "validate_not_blank")]
    pub project_name: String,
    #[validate(custom = "validate_not_blank")]
    pub project_description: String,
    #[validate(custom = "validate_not_blank")]
    pub project_owner_name: String,
    #[validate(custom = "validate_email_shape")]
    pub project_owner_email: String,
    #[validate(custom = "validate_not_blank")]
    pub project_approval: String,
}

impl ProjectFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DepartmentName => &self.department_name,
            Field::ProjectName => &self.project_name,
            Field::ProjectDescription => &self.project_description,
            Field::ProjectOwnerName => &self.project_owner_name,
            Field::ProjectOwnerEmail => &self.project_owner_email,
            Field::ProjectApproval => &self.project_approval,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::DepartmentName => &mut self.department_name,
            Field::ProjectName => &mut self.project_name,
            Field::ProjectDescription => &mut self.project_description,
            Field::ProjectOwnerName => &mut self.project_owner_name,
            Field::ProjectOwnerEmail => &mut self.project_owner_email,
            Field::ProjectApproval => &mut self.project_approval,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful form submission. Never modified once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub department_name: String,
    pub project_name: String,
    pub project_description: String,
    pub project_owner_name: String,
    pub project_owner_email: String,
    pub project_approval: String,
    pub project_approval_status: ApprovalStatus,
    pub project_approval_code: String,
    pub application_id: String,
    pub project_approval_date_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
