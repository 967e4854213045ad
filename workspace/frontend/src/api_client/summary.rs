use common::{ClientError, Summary, SUMMARY_PATH};

use super::ApiClient;

pub async fn get_summary(client: &ApiClient) -> Result<Summary, ClientError> {
    log::trace!("Fetching dashboard summary");
    let result = client.get::<Summary>(SUMMARY_PATH).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch summary: {}", e);
    } else {
        log::info!("Successfully fetched dashboard summary");
    }

    result
}

/// Check that the backend answers the summary endpoint. Returns the HTTP status.
pub async fn check_backend(client: &ApiClient) -> Result<u16, ClientError> {
    log::debug!("Probing backend at {}", client.base_url());
    client.get_status(SUMMARY_PATH).await
}
