use serde::Serialize;

use crate::models::project::ProjectRecord;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub projects: Vec<ProjectRecord>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projects: Vec::new(),
        }
    }
}
