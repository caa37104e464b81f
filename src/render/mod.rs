//! Read-only views over projects, departments and the blank form.
//!
//! Everything here is a pure function of its input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::form::FormController;
use crate::models::department::Department;
use crate::models::project::{
    ApprovalStatus, Field, ProjectRecord, APPROVER_CHOICES, DEPARTMENT_CHOICES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatusStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusStyle::Success => "success",
            StatusStyle::Warning => "warning",
            StatusStyle::Danger => "danger",
            StatusStyle::Neutral => "neutral",
        }
    }
}

pub fn status_style(status: &str) -> StatusStyle {
    match status.trim().to_ascii_lowercase().as_str() {
        "approved" => StatusStyle::Success,
        "pending" => StatusStyle::Warning,
        "rejected" => StatusStyle::Danger,
        _ => StatusStyle::Neutral,
    }
}

/// `"department-head"` becomes `"Department Head"`. Only the first hyphen is
/// replaced; every letter that starts a word is upper-cased.
pub fn approver_label(value: &str) -> String {
    let spaced = value.replacen('-', " ", 1);
    let mut label = String::with_capacity(spaced.len());
    let mut in_word = false;
    for c in spaced.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        in_word = is_word;
    }
    label
}

pub fn format_long_date(at: &DateTime<Utc>) -> String {
    at.format("%-d %B %Y, %H:%M").to_string()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: Uuid,
    pub department_name: String,
    pub project_name: String,
    pub project_description: String,
    pub project_owner_name: String,
    pub project_owner_email: String,
    pub approver: String,
    pub status: String,
    pub status_class: &'static str,
    pub project_approval_code: String,
    pub application_id: String,
    pub approval_date: String,
    pub created_at: String,
}

impl From<&ProjectRecord> for ProjectView {
    fn from(record: &ProjectRecord) -> Self {
        let status = record.project_approval_status.as_str();
        Self {
            id: record.id,
            department_name: record.department_name.clone(),
            project_name: record.project_name.clone(),
            project_description: record.project_description.clone(),
            project_owner_name: record.project_owner_name.clone(),
            project_owner_email: record.project_owner_email.clone(),
            approver: approver_label(&record.project_approval),
            status: status.to_string(),
            status_class: status_style(status).css_class(),
            project_approval_code: record.project_approval_code.clone(),
            application_id: record.application_id.clone(),
            approval_date: format_long_date(&record.project_approval_date_time),
            created_at: format_long_date(&record.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentView {
    pub name: String,
    pub project_count: usize,
    pub projects: Vec<ProjectView>,
}

impl From<&Department> for DepartmentView {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            project_count: department.projects.len(),
            projects: department.projects.iter().map(ProjectView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldView {
    pub key: Field,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView {
    pub value: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub fields: Vec<FormFieldView>,
    pub department_choices: Vec<&'static str>,
    pub approver_choices: Vec<ChoiceView>,
    pub project_approval_status: ApprovalStatus,
    pub project_approval_code: String,
    pub application_id: String,
    pub project_approval_date_time: String,
}

impl From<&FormController> for FormView {
    fn from(form: &FormController) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FormFieldView {
                key: field,
                label: field.label(),
                value: form.fields().get(field).to_string(),
                error: form.error(field).map(str::to_string),
            })
            .collect();
        let approver_choices = APPROVER_CHOICES
            .into_iter()
            .map(|value| ChoiceView {
                value,
                label: approver_label(value),
            })
            .collect();

        Self {
            fields,
            department_choices: DEPARTMENT_CHOICES.to_vec(),
            approver_choices,
            project_approval_status: ApprovalStatus::Pending,
            project_approval_code: form.approval_code().to_string(),
            application_id: form.application_id().to_string(),
            project_approval_date_time: format_long_date(&form.approval_date_time()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ProjectFields;
    use crate::utils::tokens::TokenGenerator;
    use chrono::TimeZone;

    #[test]
    fn status_style_ignores_case() {
        for status in ["APPROVED", "approved", "Approved", " Approved "] {
            assert_eq!(status_style(status), StatusStyle::Success);
        }
        assert_eq!(status_style("pEnDiNg"), StatusStyle::Warning);
        assert_eq!(status_style("REJECTED"), StatusStyle::Danger);
        assert_eq!(status_style("on hold"), StatusStyle::Neutral);
        assert_eq!(status_style(""), StatusStyle::Neutral);
        assert_eq!(StatusStyle::Danger.css_class(), "danger");
    }

    #[test]
    fn approver_label_spaces_and_capitalizes() {
        assert_eq!(approver_label("department-head"), "Department Head");
        assert_eq!(approver_label("team-lead"), "Team Lead");
        assert_eq!(approver_label("cto"), "Cto");
        assert_eq!(approver_label(""), "");
    }

    #[test]
    fn approver_label_replaces_only_the_first_hyphen() {
        assert_eq!(approver_label("vice-president-sales"), "Vice President-Sales");
        assert_eq!(approver_label("head of   ops"), "Head Of   Ops");
    }

    #[test]
    fn long_date_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(format_long_date(&at), "5 March 2024, 09:07");
    }

    #[test]
    fn project_view_decorates_record() {
        let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            department_name: "Finance".to_string(),
            project_name: "Ledger".to_string(),
            project_description: "desc".to_string(),
            project_owner_name: "Ada".to_string(),
            project_owner_email: "ada@example.com".to_string(),
            project_approval: "finance-director".to_string(),
            project_approval_status: ApprovalStatus::Pending,
            project_approval_code: "PAC-ABCD1234".to_string(),
            application_id: "APP-000007".to_string(),
            project_approval_date_time: at,
            created_at: at,
        };

        let view = ProjectView::from(&record);
        assert_eq!(view.approver, "Finance Director");
        assert_eq!(view.status, "Pending");
        assert_eq!(view.status_class, "warning");
        assert_eq!(view.approval_date, "31 December 2025, 23:59");

        let department = Department {
            name: "Finance".to_string(),
            projects: vec![record.clone(), record],
        };
        let dept_view = DepartmentView::from(&department);
        assert_eq!(dept_view.project_count, 2);
        assert_eq!(dept_view.projects.len(), 2);
    }

    #[test]
    fn form_view_lists_every_field_and_choice() {
        let fields = ProjectFields {
            project_name: "Ledger".to_string(),
            ..Default::default()
        };
        let form = FormController::with_fields(&TokenGenerator::new(), fields);
        let view = FormView::from(&form);

        assert_eq!(view.fields.len(), Field::ALL.len());
        assert_eq!(view.fields[1].key, Field::ProjectName);
        assert_eq!(view.fields[1].value, "Ledger");
        assert!(view.fields.iter().all(|f| f.error.is_none()));
        assert_eq!(view.department_choices.len(), 10);
        assert_eq!(view.department_choices[0], "Depart A");
        assert_eq!(view.department_choices[9], "Research & Development");
        assert_eq!(view.approver_choices.len(), 6);
        assert_eq!(view.approver_choices[2].value, "Mike Davis - CTO");
        assert_eq!(view.approver_choices[2].label, "Mike Davis   CTO");
        assert_eq!(view.project_approval_status, ApprovalStatus::Pending);
        assert_eq!(view.application_id, "APP-000001");
    }
}
