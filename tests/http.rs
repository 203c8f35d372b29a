use once_cell::sync::Lazy;
use reqwest::Client;
use std::net::TcpListener as StdTcpListener;
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use temperature_heatmap::errors::FetchError;
use temperature_heatmap::{App, TemperatureDataset, fetch_dataset};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static SAMPLE_PAYLOAD: Lazy<String> = Lazy::new(|| {
    let mut records = Vec::new();
    for year in 1753..1756 {
        for month in 1..=12 {
            records.push(serde_json::json!({
                "year": year,
                "month": month,
                "variance": (year - 1754) as f64 + month as f64 * 0.05,
            }));
        }
    }
    serde_json::json!({ "baseTemperature": 8.66, "monthlyVariance": records }).to_string()
});

const SCENARIO_PAYLOAD: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.2 },
    { "year": 1753, "month": 2, "variance": 0.3 }
  ]
}"#;

struct StubServer {
    url: String,
    hits: Arc<AtomicUsize>,
}

async fn serve(status_line: &'static str, body: String) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    StubServer {
        url: format!("http://{addr}/global-temperature.json"),
        hits,
    }
}

fn closed_port_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/global-temperature.json")
}

fn unique_output_path() -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "temperature_heatmap_{}_{}/heatmap.html",
        std::process::id(),
        nanos
    ));
    path
}

fn run_binary(data_url: &str, output: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_temperature_heatmap"))
        .env("HEATMAP_DATA_URL", data_url)
        .env("HEATMAP_OUTPUT_PATH", output)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run binary")
}

#[tokio::test]
async fn fetch_decodes_payload() {
    let server = serve("200 OK", SAMPLE_PAYLOAD.clone()).await;
    let dataset = fetch_dataset(&Client::new(), &server.url).await.unwrap();

    assert_eq!(dataset.base_temperature, 8.66);
    assert_eq!(dataset.records.len(), 36);
    assert_eq!(dataset.year_span(), Some((1753, 1755)));
}

#[tokio::test]
async fn fetch_reports_http_status() {
    let server = serve("500 Internal Server Error", "oops".to_string()).await;
    let err = fetch_dataset(&Client::new(), &server.url).await.unwrap_err();
    match err {
        FetchError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn fetch_reports_malformed_payload() {
    let server = serve("200 OK", r#"{"baseTemperature": "warm"}"#.to_string()).await;
    let err = fetch_dataset(&Client::new(), &server.url).await.unwrap_err();
    assert!(matches!(err, FetchError::Payload(..)));
}

#[tokio::test]
async fn mount_fetches_once_and_draws_every_record() {
    let server = serve("200 OK", SAMPLE_PAYLOAD.clone()).await;
    let mut app = App::new(server.url.clone());

    app.mount().await;
    app.mount().await;
    let page = app.render().await;

    assert_eq!(server.hits.load(Ordering::SeqCst), 1);
    assert_eq!(app.document().cells().len(), 36);
    assert_eq!(page.matches(r#"class="cell""#).count(), 36);
    assert!(page.contains("1753 - 1755: base temperature 8.66℃"));
    assert_eq!(page.matches(r#"id="tooltip""#).count(), 1);
}

#[tokio::test]
async fn scenario_cells_and_hover_text() {
    let server = serve("200 OK", SCENARIO_PAYLOAD.to_string()).await;
    let mut app = App::new(server.url.clone());
    app.mount().await;
    app.render().await;

    let temps: Vec<f64> = app
        .document()
        .cells()
        .iter()
        .map(|c| c.get_attr("data-temp").unwrap().parse().unwrap())
        .collect();
    assert_eq!(temps.len(), 2);
    assert!((temps[0] - 7.46).abs() < 1e-9);
    assert!((temps[1] - 8.96).abs() < 1e-9);

    assert!(app.document_mut().pointer_enter(0, 400.0, 150.0));
    let text = app.document().tooltip.as_ref().unwrap().text_content();
    assert!(text.contains("1753 - January"));
    assert!(text.contains("7.46℃"));
}

#[tokio::test]
async fn fetch_failure_keeps_default_state() {
    let mut app = App::new(closed_port_url());
    app.mount().await;
    let page = app.render().await;

    assert_eq!(app.state().snapshot().await, TemperatureDataset::default());
    assert!(app.document().cells().is_empty());
    assert!(page.contains("base temperature 0℃"));
}

#[test]
fn binary_writes_empty_page_when_fetch_fails() {
    let output = unique_output_path();
    let result = run_binary(&closed_port_url(), &output);

    assert!(result.status.success());
    let logs = String::from_utf8_lossy(&result.stdout);
    assert!(logs.contains("failed to fetch temperature dataset"));

    let page = std::fs::read_to_string(&output).expect("page written");
    assert!(page.contains(r#"id="title""#));
    assert!(!page.contains(r#"class="cell""#));
}

#[tokio::test]
async fn binary_writes_heatmap_page() {
    let server = serve("200 OK", SAMPLE_PAYLOAD.clone()).await;
    let output = unique_output_path();
    let url = server.url.clone();
    let path = output.clone();

    let result = tokio::task::spawn_blocking(move || run_binary(&url, &path))
        .await
        .unwrap();

    assert!(result.status.success());
    let page = std::fs::read_to_string(&output).expect("page written");
    assert_eq!(page.matches(r#"class="cell""#).count(), 36);
    assert!(page.contains(r#"id="legend""#));
}
