use temperature_heatmap::{App, persist_page, resolve_data_url, resolve_output_path};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_url = resolve_data_url();
    let output_path = resolve_output_path();

    let mut app = App::new(data_url);
    app.mount().await;
    let page = app.render().await;

    persist_page(&output_path, &page).await?;
    info!("heatmap written to {}", output_path.display());

    Ok(())
}
