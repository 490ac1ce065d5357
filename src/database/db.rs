use crate::config::AppConfig;
use log::info;
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

/// Opens a client and pings the server so a bad URI fails at startup.
pub async fn connect_to_mongo(config: &AppConfig) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some(config.service_name.clone());

    let client = Client::with_options(client_options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    info!("Connected successfully to MongoDB");

    Ok(client)
}
