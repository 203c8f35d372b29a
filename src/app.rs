use crate::chart::Chart;
use crate::fetch::fetch_dataset;
use crate::models::TemperatureDataset;
use crate::state::AppState;
use crate::title::{HeadingLevel, title};
use crate::ui::{Document, render_page};
use reqwest::Client;
use tracing::{error, info};

pub const HEADING: &str = "Monthly Global Land-Surface Temperature";

/// Application shell: owns the dataset state, fetches it once and renders the page.
pub struct App {
    client: Client,
    data_url: String,
    state: AppState,
    chart: Chart,
    document: Document,
}

impl App {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), data_url)
    }

    pub fn with_client(client: Client, data_url: impl Into<String>) -> Self {
        Self {
            client,
            data_url: data_url.into(),
            state: AppState::new(TemperatureDataset::default()),
            chart: Chart::new(),
            document: Document::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Issues the dataset request on the first call only. A failed request is
    /// logged and leaves the current (default) dataset in place.
    pub async fn mount(&mut self) {
        if !self.state.claim_fetch() {
            return;
        }

        match fetch_dataset(&self.client, &self.data_url).await {
            Ok(dataset) => self.state.replace(dataset).await,
            Err(err) => error!("failed to fetch temperature dataset: {err}"),
        }
    }

    /// Renders the page from the current state, redrawing the chart if the records changed.
    pub async fn render(&mut self) -> String {
        let dataset = self.state.snapshot().await;
        if self.chart.update(&dataset.records, dataset.base_temperature, &mut self.document) {
            info!("drew heatmap with {} cells", self.document.cells().len());
        }

        let headings = [
            title(HeadingLevel::H1, HEADING, "title"),
            title(HeadingLevel::H3, &description(&dataset), "description"),
        ];
        render_page(&headings, &self.document)
    }
}

pub fn description(dataset: &TemperatureDataset) -> String {
    match dataset.year_span() {
        Some((first, last)) => format!(
            "{first} - {last}: base temperature {}℃",
            dataset.base_temperature
        ),
        None => format!("base temperature {}℃", dataset.base_temperature),
    }
}
