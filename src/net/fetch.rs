use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Error while retrieving the raw dataset body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Client error: {0}")]
    Client(reqwest::Error),
    #[error("Request failed: {0}")]
    Request(reqwest::Error),
    #[error("Server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("Failed to read body: {0}")]
    Body(reqwest::Error),
    #[error("Failed to read {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can produce the dataset body (a JSON array of records).
pub trait ElementSource {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<String, FetchError>;
}

/// `GET` against the element listing endpoint.
pub struct HttpSource {
    url: Url,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self { url, timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ElementSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(self.timeout)
            .build()
            .map_err(FetchError::Client)?;

        let response = client
            .get(self.url.as_str())
            .header("Accept", "application/json")
            .send()
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.text().map_err(FetchError::Body)
    }
}

/// A JSON file on disk in the same format the endpoint serves.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ElementSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        std::fs::read_to_string(&self.path).map_err(|source| FetchError::File {
            path: self.path.clone(),
            source,
        })
    }
}

/// Pick a source for the configured endpoint: `http(s)://` or `file://`.
pub fn source_for_endpoint(
    endpoint: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn ElementSource + Send>, FetchError> {
    let invalid = |reason: String| FetchError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(Box::new(HttpSource::new(url).with_timeout(timeout))),
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| invalid("not a local file path".to_string()))?;
            Ok(Box::new(FileSource::new(path)))
        }
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}
