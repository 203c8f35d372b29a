pub mod app;
pub mod axis;
pub mod chart;
pub mod color;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod output;
pub mod scale;
pub mod state;
pub mod svg;
pub mod title;
pub mod tooltip;
pub mod ui;

pub use app::App;
pub use fetch::{fetch_dataset, resolve_data_url};
pub use models::{MonthlyRecord, TemperatureDataset};
pub use output::{persist_page, resolve_output_path};
pub use state::AppState;
