use actix_web::{web, HttpResponse};
use log::{error, info};
use std::sync::Mutex;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::form::FormController;
use crate::models::project::{ProjectFields, ProjectRecord};
use crate::render::ProjectView;
use crate::store::ProjectStore;
use crate::utils::tokens::TokenGenerator;

pub async fn create_project(
    store: web::Data<Mutex<ProjectStore>>,
    tokens: web::Data<TokenGenerator>,
    config: web::Data<AppConfig>,
    fields: web::Json<ProjectFields>,
) -> Result<HttpResponse, AppError> {
    let mut form = FormController::with_fields(&tokens, fields.into_inner());

    let view = form
        .submit(config.submit_delay, |record| store_record(&store, record))
        .await??;

    Ok(HttpResponse::Created().json(view))
}

pub async fn get_project(
    store: web::Data<Mutex<ProjectStore>>,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project_id = Uuid::parse_str(&project_id.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid project ID".to_string()))?;

    let store = lock_store(&store)?;
    let project = store
        .find_project(project_id)
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ProjectView::from(project)))
}

fn store_record(store: &Mutex<ProjectStore>, record: ProjectRecord) -> Result<ProjectView, AppError> {
    let mut store = lock_store(store)?;
    let view = ProjectView::from(&record);
    let department = store.append(record);
    info!(
        "Stored project {} ({}) under '{}', {} project(s) in department",
        view.id,
        view.application_id,
        department.name,
        department.projects.len()
    );
    Ok(view)
}

pub(crate) fn lock_store(
    store: &Mutex<ProjectStore>,
) -> Result<std::sync::MutexGuard<'_, ProjectStore>, AppError> {
    store.lock().map_err(|err| {
        error!("Project store lock poisoned: {}", err);
        AppError::InternalServerError("Project store unavailable".to_string())
    })
}
