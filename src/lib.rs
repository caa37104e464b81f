pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod render;
pub mod store;
pub mod utils;

use actix_web::web;

/// Registers every route. Shared state is expected as app data:
/// `Mutex<ProjectStore>`, `TokenGenerator` and `AppConfig`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::landing::landing)),
    )
    .service(
        web::resource("/v1/form")
            .route(web::get().to(handlers::form::get_form)),
    )
    .service(
        web::resource("/v1/project")
            .route(web::post().to(handlers::project::create_project)),
    )
    .service(
        web::resource("/v1/project/{id}")
            .route(web::get().to(handlers::project::get_project)),
    )
    .service(
        web::resource("/v1/department")
            .route(web::get().to(handlers::department::get_departments)),
    );
}
