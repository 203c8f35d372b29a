use crate::models::TemperatureDataset;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct AppState {
    pub dataset: Arc<Mutex<TemperatureDataset>>,
    fetch_issued: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(dataset: TemperatureDataset) -> Self {
        Self {
            dataset: Arc::new(Mutex::new(dataset)),
            fetch_issued: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns true exactly once per state; later callers must not fetch again.
    pub fn claim_fetch(&self) -> bool {
        !self.fetch_issued.swap(true, Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> TemperatureDataset {
        self.dataset.lock().await.clone()
    }

    pub async fn replace(&self, dataset: TemperatureDataset) {
        *self.dataset.lock().await = dataset;
    }
}
