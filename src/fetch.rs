use crate::errors::FetchError;
use crate::models::{DatasetPayload, TemperatureDataset};
use reqwest::Client;
use std::env;
use tracing::{info, warn};

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

pub fn resolve_data_url() -> String {
    if let Ok(url) = env::var("HEATMAP_DATA_URL") {
        return url;
    }

    DEFAULT_DATA_URL.to_string()
}

/// Downloads and decodes the dataset. Callers decide what a failure means.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<TemperatureDataset, FetchError> {
    info!("fetching temperature dataset from {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {url}: {e:?}");
            return Err(match e.status() {
                Some(status) => FetchError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                },
                None => FetchError::NetworkRequest(url.to_string(), e),
            });
        }
    };

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Body(url.to_string(), e))?;
    let payload: DatasetPayload =
        serde_json::from_slice(&body).map_err(|e| FetchError::Payload(url.to_string(), e))?;

    let dataset = TemperatureDataset::from(payload);
    info!(
        "fetched {} monthly records (base temperature {})",
        dataset.records.len(),
        dataset.base_temperature
    );
    Ok(dataset)
}
