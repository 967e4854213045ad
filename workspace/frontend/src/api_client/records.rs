use common::{collection_path, ClientError, Collection, ItemsResponse, Record};
use serde_json::{Map, Value};

use super::ApiClient;

/// Fetch every record of a collection. A body of the wrong shape yields an empty list.
pub async fn list_records(client: &ApiClient, collection: Collection) -> Result<Vec<Record>, ClientError> {
    log::trace!("Fetching {} records", collection);
    let body = client.get_text(&collection_path(collection)).await?;
    let items = ItemsResponse::from_body(&body).items;
    log::info!("Fetched {} {} records", items.len(), collection);
    Ok(items)
}

/// Create a record from a quick-add payload.
pub async fn create_record(
    client: &ApiClient,
    collection: Collection,
    payload: &Map<String, Value>,
) -> Result<(), ClientError> {
    log::debug!("Creating {} with fields {:?}", collection, payload.keys().collect::<Vec<_>>());
    let result = client.post(&collection_path(collection), payload).await;
    match &result {
        Ok(()) => log::info!("Successfully created {}", collection),
        Err(e) => log::error!("Failed to create {}: {}", collection, e),
    }
    result
}
