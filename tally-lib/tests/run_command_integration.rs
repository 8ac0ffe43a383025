//! Integration tests driving the full command line against a mock page.

use camino::Utf8PathBuf;
use std::fs;
use tally_lib::Host;
use tally_lib::store::ObservationLog;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }
}

fn page(yesterday: i64) -> String {
    format!(
        r#"<html><body><div id="wrap"><div><div class="announcement s_clear"><span><em>3</em><em>{yesterday}</em><em>900</em></span></div></div></div></body></html>"#
    )
}

struct Setup {
    _dir: tempfile::TempDir,
    log_path: Utf8PathBuf,
    chart_path: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl Setup {
    fn new(server: &MockServer) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir is not UTF-8");
        let config_path = root.join("tally.toml");

        fs::write(
            &config_path,
            format!(
                "url = \"{}/bbs/index.aspx\"\nrequest_timeout = \"10s\"\n\n[chart]\nwidth = 300\nheight = 150\n",
                server.uri()
            ),
        )
        .expect("Failed to write config");

        Self {
            log_path: root.join("data").join("record.json"),
            chart_path: root.join("chart.png"),
            config_path,
            _dir: dir,
        }
    }

    async fn run(&self, host: &mut TestHost) -> Result<(), ohno::AppError> {
        tally_lib::run(
            host,
            [
                "tally",
                "-p",
                self.log_path.as_str(),
                "--chart",
                self.chart_path.as_str(),
                "--config",
                self.config_path.as_str(),
                "--log-level",
                "none",
            ],
        )
        .await
    }
}

async fn serve(server: &MockServer, yesterday: i64) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/bbs/index.aspx"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(yesterday)))
        .mount(server)
        .await;
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_three_daily_runs() {
    let mock_server = MockServer::start().await;
    let setup = Setup::new(&mock_server);

    // day one: a single observation, nothing to chart
    serve(&mock_server, 42).await;
    let mut host = TestHost::new();
    setup.run(&mut host).await.unwrap();
    assert!(host.output_str().contains("Recorded 42"), "got: {}", host.output_str());
    assert!(!setup.chart_path.exists());

    // day two: same value, still nothing to chart
    let mut host = TestHost::new();
    setup.run(&mut host).await.unwrap();
    assert!(host.output_str().contains("has not changed"), "got: {}", host.output_str());
    assert!(!setup.chart_path.exists());

    // day three: the value moves and the chart appears
    serve(&mock_server, 57).await;
    let mut host = TestHost::new();
    setup.run(&mut host).await.unwrap();
    assert!(host.output_str().contains("Chart written"), "got: {}", host.output_str());

    let values: Vec<_> = ObservationLog::load(&setup.log_path)
        .unwrap()
        .observations()
        .iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, [42, 42, 57]);

    let png = fs::read(&setup.chart_path).unwrap();
    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (300, 150));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_server_error_fails_without_touching_log() {
    let mock_server = MockServer::start().await;
    let setup = Setup::new(&mock_server);

    serve(&mock_server, 8).await;
    setup.run(&mut TestHost::new()).await.unwrap();
    let before = fs::read(&setup.log_path).unwrap();

    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/bbs/index.aspx"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let mut host = TestHost::new();
    assert!(setup.run(&mut host).await.is_err());
    assert!(host.output_str().is_empty());
    assert!(host.error_str().contains("Run failed"), "got: {}", host.error_str());
    assert_eq!(fs::read(&setup.log_path).unwrap(), before);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_invalid_config_fails_before_fetching() {
    let mock_server = MockServer::start().await;
    let setup = Setup::new(&mock_server);
    fs::write(&setup.config_path, "selector = \"div >\"\n").unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut host = TestHost::new();
    assert!(setup.run(&mut host).await.is_err());
    assert!(host.error_str().contains("Run failed"), "got: {}", host.error_str());
    assert!(!setup.log_path.exists());
}
