use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Mutex;

use project_intake::config::AppConfig;
use project_intake::store::ProjectStore;
use project_intake::utils::tokens::TokenGenerator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    // One store for the whole process, shared by every worker.
    let store = web::Data::new(Mutex::new(ProjectStore::new()));
    let tokens = web::Data::new(TokenGenerator::new());
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    info!("Starting server at {} (submit delay {:?})", bind_addr, config.submit_delay);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(tokens.clone())
            .app_data(config.clone())
            .configure(project_intake::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
