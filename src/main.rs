use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use social_posts::config::StoreBackend;
use social_posts::database::{self, MemoryStore, MongoStore};
use social_posts::{AppConfig, AppState, routes};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let state = match config.store_backend {
        StoreBackend::Mongo => {
            let client = database::connect_to_mongo(&config).await.map_err(|e| {
                error!("Failed to connect to MongoDB: {}", e);
                io::Error::other(e)
            })?;
            let store = Arc::new(MongoStore::new(&client, &config.database_name));
            AppState::new(config.clone(), store.clone(), store)
        }
        StoreBackend::Memory => {
            info!("Using the in-memory store; data is lost on shutdown");
            let store = Arc::new(MemoryStore::new());
            AppState::new(config.clone(), store.clone(), store)
        }
    };

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| routes(cfg, &state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
