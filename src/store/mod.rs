use log::debug;
use uuid::Uuid;

use crate::models::department::Department;
use crate::models::project::ProjectRecord;

/// In-memory owner of every submitted project, grouped by department.
///
/// `append` is the only way in. Departments keep the order in which their
/// names first appeared, and projects keep submission order.
#[derive(Debug, Default)]
pub struct ProjectStore {
    departments: Vec<Department>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ProjectRecord) -> &Department {
        let index = match self
            .departments
            .iter()
            .position(|dept| dept.name == record.department_name)
        {
            Some(index) => index,
            None => {
                debug!("Creating department '{}'", record.department_name);
                self.departments.push(Department::new(record.department_name.clone()));
                self.departments.len() - 1
            }
        };

        let department = &mut self.departments[index];
        department.projects.push(record);
        department
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.name == name)
    }

    pub fn find_project(&self, id: Uuid) -> Option<&ProjectRecord> {
        self.departments
            .iter()
            .flat_map(|dept| dept.projects.iter())
            .find(|project| project.id == id)
    }

    pub fn project_count(&self) -> usize {
        self.departments.iter().map(|dept| dept.projects.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ApprovalStatus;
    use chrono::Utc;

    fn record(department: &str, project: &str) -> ProjectRecord {
        let now = Utc::now();
        ProjectRecord {
            id: Uuid::new_v4(),
            department_name: department.to_string(),
            project_name: project.to_string(),
            project_description: "desc".to_string(),
            project_owner_name: "Ada".to_string(),
            project_owner_email: "ada@example.com".to_string(),
            project_approval: "team-lead".to_string(),
            project_approval_status: ApprovalStatus::Pending,
            project_approval_code: "PAC-TEST0001".to_string(),
            application_id: "APP-000001".to_string(),
            project_approval_date_time: now,
            created_at: now,
        }
    }

    fn names(dept: &Department) -> Vec<&str> {
        dept.projects.iter().map(|p| p.project_name.as_str()).collect()
    }

    #[test]
    fn same_department_groups_in_submission_order() {
        let mut store = ProjectStore::new();
        store.append(record("Finance", "Ledger"));
        let dept = store.append(record("Finance", "Payroll"));
        assert_eq!(names(dept), ["Ledger", "Payroll"]);

        assert_eq!(store.departments().len(), 1);
        assert_eq!(store.project_count(), 2);
    }

    #[test]
    fn different_departments_each_get_one_record() {
        let mut store = ProjectStore::new();
        store.append(record("Finance", "Ledger"));
        store.append(record("Research", "Telescope"));

        let depts = store.departments();
        assert_eq!(depts.len(), 2);
        assert_eq!(depts[0].name, "Finance");
        assert_eq!(depts[1].name, "Research");
        assert_eq!(names(&depts[0]), ["Ledger"]);
        assert_eq!(names(&depts[1]), ["Telescope"]);
    }

    #[test]
    fn department_lookup_is_case_sensitive() {
        let mut store = ProjectStore::new();
        store.append(record("Finance", "Ledger"));
        store.append(record("finance", "Audit"));

        assert_eq!(store.departments().len(), 2);
        assert!(store.department("FINANCE").is_none());
        assert_eq!(names(store.department("finance").unwrap()), ["Audit"]);
    }

    #[test]
    fn trailing_whitespace_makes_a_separate_department() {
        let mut store = ProjectStore::new();
        store.append(record("Finance", "Ledger"));
        store.append(record("Finance ", "Audit"));

        assert_eq!(store.departments().len(), 2);
        assert_eq!(names(store.department("Finance").unwrap()), ["Ledger"]);
        assert_eq!(names(store.department("Finance ").unwrap()), ["Audit"]);
    }

    #[test]
    fn departments_keep_first_appearance_order() {
        let mut store = ProjectStore::new();
        for (dept, project) in [("Ops", "a"), ("Finance", "b"), ("Ops", "c"), ("Art", "d")] {
            store.append(record(dept, project));
        }

        let order: Vec<&str> = store.departments().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(order, ["Ops", "Finance", "Art"]);
        assert_eq!(names(&store.departments()[0]), ["a", "c"]);
    }

    #[test]
    fn find_project_searches_every_department() {
        let mut store = ProjectStore::new();
        store.append(record("Ops", "a"));
        let wanted = record("Art", "b");
        let id = wanted.id;
        store.append(wanted);

        assert_eq!(store.find_project(id).map(|p| p.project_name.as_str()), Some("b"));
        assert!(store.find_project(Uuid::new_v4()).is_none());
    }
}
