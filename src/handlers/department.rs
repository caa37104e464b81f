use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Mutex;

use crate::errors::AppError;
use crate::handlers::project::lock_store;
use crate::render::DepartmentView;
use crate::store::ProjectStore;

#[derive(Deserialize)]
pub struct DepartmentQueryParams {
    name: Option<String>,
}

/// Dashboard: every department in first-appearance order, or one by exact name.
pub async fn get_departments(
    store: web::Data<Mutex<ProjectStore>>,
    query: web::Query<DepartmentQueryParams>,
) -> Result<HttpResponse, AppError> {
    let store = lock_store(&store)?;

    let departments: Vec<DepartmentView> = match &query.name {
        Some(name) => store.department(name).into_iter().map(DepartmentView::from).collect(),
        None => store.departments().iter().map(DepartmentView::from).collect(),
    };

    Ok(HttpResponse::Ok().json(departments))
}
