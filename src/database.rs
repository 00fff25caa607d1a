use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection, Database,
};
use tracing::{debug, info};

use crate::models::app_config::DatabaseConfig;

/// Builds a client for the configured endpoint. No server round-trip happens here;
/// the driver connects lazily on the first operation.
pub async fn get_database_client(database_config: &DatabaseConfig) -> mongodb::error::Result<Client> {
    // Parse your connection string into an options struct
    let mut client_options = ClientOptions::parse(&database_config.conn_string).await?;
    client_options.app_name = Some(database_config.app_name.clone());
    debug!("Database: Client options parsed for [{0:?}]", client_options.hosts);
    Client::with_options(client_options)
}

/// Pings the server behind `database`, forcing the driver to establish a connection.
pub async fn ping_db(database: &Database) -> mongodb::error::Result<Document> {
    let reply = database.run_command(doc! {"ping": 1}, None).await?;
    info!("Database: Connection established");
    Ok(reply)
}

pub fn books_collection(client: &Client, database_config: &DatabaseConfig) -> Collection<Document> {
    client
        .database(&database_config.database_name)
        .collection(&database_config.collection_name)
}
