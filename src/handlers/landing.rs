use actix_web::HttpResponse;
use serde_json::json;

pub async fn landing() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "title": "Project Intake",
        "description": "Register a new project profile for approval, then follow it on the department dashboard.",
        "links": {
            "form": "/v1/form",
            "submit": "/v1/project",
            "dashboard": "/v1/department",
        },
    }))
}
