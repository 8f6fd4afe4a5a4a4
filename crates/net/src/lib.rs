//! Document loading: HTTP(S) fetches and local files.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use url::Url;

const LOG_TARGET: &str = "net.fetch";
const USER_AGENT: &str = "soupview/0.1";
const TIMEOUT: Duration = Duration::from_secs(10);
/// Bodies larger than this are truncated.
pub const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// A loaded document.
#[derive(Clone, Debug)]
pub struct Fetched {
    /// Final URL after redirects, or the file path that was read.
    pub url: String,
    /// HTTP status; `None` for local files.
    pub status: Option<u16>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl { url: String, reason: String },
    UnsupportedScheme { scheme: String },
    Http { status: u16 },
    Transport(String),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl { url, reason } => write!(f, "invalid url {url:?}: {reason}"),
            FetchError::UnsupportedScheme { scheme } => {
                write!(f, "unsupported url scheme: {scheme}")
            }
            FetchError::Http { status } => write!(f, "server responded with status {status}"),
            FetchError::Transport(reason) => write!(f, "transport error: {reason}"),
            FetchError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// GETs an `http` or `https` URL and returns the response body.
pub fn fetch(raw_url: &str) -> Result<Fetched, FetchError> {
    let url = parse_url(raw_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }

    let start = Instant::now();
    let agent = ureq::AgentBuilder::new()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build();
    let response = match agent.request_url("GET", &url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => return Err(FetchError::Http { status }),
        Err(ureq::Error::Transport(err)) => return Err(FetchError::Transport(err.to_string())),
    };

    let status = response.status();
    let final_url = response.get_url().to_string();
    let content_type = response.header("content-type").map(str::to_string);

    let mut body = Vec::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    log::debug!(
        target: LOG_TARGET,
        "GET {final_url} -> {status}, {} bytes in {}ms",
        body.len(),
        start.elapsed().as_millis()
    );

    Ok(Fetched {
        url: final_url,
        status: Some(status),
        content_type,
        body,
    })
}

/// Reads a local file as a document.
pub fn read_file(path: &Path) -> Result<Fetched, FetchError> {
    let body = std::fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(target: LOG_TARGET, "read {} ({} bytes)", path.display(), body.len());
    Ok(Fetched {
        url: path.display().to_string(),
        status: None,
        content_type: None,
        body,
    })
}

/// Loads `target`: `http(s)://` URLs are fetched, `file://` URLs and anything
/// that does not parse as an absolute URL are read from disk.
pub fn load(target: &str) -> Result<Fetched, FetchError> {
    let Ok(url) = Url::parse(target) else {
        return read_file(Path::new(target));
    };
    match url.scheme() {
        "http" | "https" => fetch(target),
        "file" => {
            let path = url.to_file_path().map_err(|()| FetchError::InvalidUrl {
                url: target.to_string(),
                reason: "not a local file path".to_string(),
            })?;
            read_file(&path)
        }
        other => Err(FetchError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("soupview-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn fetch_rejects_non_http_schemes() {
        let err = fetch("ftp://example.com/x").unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme { ref scheme } if scheme == "ftp"));
    }

    #[test]
    fn fetch_rejects_relative_urls() {
        let err = fetch("index.html").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(err.to_string().starts_with("invalid url \"index.html\""));
    }

    #[test]
    fn load_reads_plain_paths() {
        let path = temp_file("plain.html", b"<p>hi</p>");
        let fetched = load(path.to_str().unwrap()).unwrap();
        assert_eq!(fetched.body, b"<p>hi</p>");
        assert_eq!(fetched.status, None);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_reads_file_urls() {
        let path = temp_file("url.html", b"<b>x</b>");
        let url = Url::from_file_path(&path).unwrap();
        let fetched = load(url.as_str()).unwrap();
        assert_eq!(fetched.body, b"<b>x</b>");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_reports_missing_files() {
        let err = load("/definitely/not/here.html").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_rejects_unknown_schemes() {
        let err = load("gopher://example.com/").unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme { .. }));
    }
}
