//! MongoDB connection bootstrap.

use std::time::Duration;

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::Config;
use crate::errors::StorageError;

/// Connect to MongoDB and confirm the server answers a ping.
///
/// `timeout` bounds server selection, the initial connection, and the ping
/// as a whole. A zero timeout applies no deadline.
pub async fn connect_mongodb(uri: &str, timeout: Duration) -> Result<Client, StorageError> {
    let unavailable = |err: mongodb::error::Error| StorageError::Unavailable(err.to_string());

    let connect = async {
        let mut options = ClientOptions::parse(uri).await.map_err(unavailable)?;
        if !timeout.is_zero() {
            options.server_selection_timeout = Some(timeout);
            options.connect_timeout = Some(timeout);
        }

        let client = Client::with_options(options).map_err(unavailable)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(unavailable)?;
        Ok::<_, StorageError>(client)
    };

    let client = if timeout.is_zero() {
        connect.await?
    } else {
        tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| StorageError::TimedOut(timeout))??
    };

    info!("Connected to MongoDB successfully!");
    Ok(client)
}

/// Connect using `config` and open its configured database.
pub async fn open_database(config: &Config) -> Result<Database, StorageError> {
    info!("Connecting to MongoDB...");
    let client = connect_mongodb(&config.mongodb_uri, config.query_timeout()).await?;
    Ok(client.database(&config.database_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_uri_is_unavailable() {
        let err = connect_mongodb("not-a-mongodb-uri", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)), "{err:?}");
    }
}
