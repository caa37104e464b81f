use actix_web::{web, HttpResponse};

use crate::form::FormController;
use crate::render::FormView;
use crate::utils::tokens::TokenGenerator;

/// Mounts a blank form and returns what it would show, generated values included.
pub async fn get_form(tokens: web::Data<TokenGenerator>) -> HttpResponse {
    let form = FormController::new(&tokens);
    HttpResponse::Ok().json(FormView::from(&form))
}
