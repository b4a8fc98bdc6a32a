use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ApiConfig;

/// Account summary shown on the Overview tab
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    pub login: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Kind of a repository tree entry as reported by the contents API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One row of a directory listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Every way a GitHub request can fail. The state machine only ever sees the
/// `Display` text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to {action}: {status}")]
    Status {
        action: &'static str,
        status: StatusCode,
    },

    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to decode file content: {0}")]
    Content(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Raw body of a `contents` call on a file
#[derive(Debug, Deserialize)]
struct ContentPayload {
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    items: Vec<Repository>,
}

/// Blocking client for the public GitHub REST API.
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| ApiError::InvalidUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }
        let http = Client::builder().user_agent(config.user_agent.clone()).build()?;
        Ok(Self {
            http,
            base_url,
            per_page: config.per_page.max(1),
        })
    }

    /// `GET /users/{id}`
    pub fn profile(&self, id: &str) -> Result<Profile> {
        let url = endpoint(&self.base_url, &["users", id])?;
        let body = self.get("fetch profile", url)?;
        decode(&body)
    }

    /// `GET /users/{login}/repos`, following pages until the last one
    pub fn repositories(&self, login: &str) -> Result<Vec<Repository>> {
        let per_page = self.per_page;
        collect_pages(per_page as usize, |page| {
            let mut url = endpoint(&self.base_url, &["users", login, "repos"])?;
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &per_page.to_string());
            let body = self.get("fetch repositories", url)?;
            decode(&body)
        })
    }

    /// `GET /repos/{login}/{repo}/contents/{path}` on a directory
    pub fn directory(&self, login: &str, repo: &str, path: &str) -> Result<Vec<Entry>> {
        let url = contents_url(&self.base_url, login, repo, path)?;
        let body = self.get("fetch repository contents", url)?;
        decode(&body)
    }

    /// `GET /repos/{login}/{repo}/contents/{path}` on a file, decoded to text
    pub fn file_content(&self, login: &str, repo: &str, path: &str) -> Result<String> {
        let url = contents_url(&self.base_url, login, repo, path)?;
        let body = self.get("fetch file content", url)?;
        decode_file_content(&body)
    }

    /// `GET /search/repositories?q={query} user:{login}`
    pub fn search(&self, login: &str, query: &str) -> Result<Vec<Repository>> {
        let url = search_url(&self.base_url, login, query)?;
        let body = self.get("search repositories", url)?;
        let payload: SearchPayload = decode(&body)?;
        Ok(payload.items)
    }

    fn get(&self, action: &'static str, url: Url) -> Result<String> {
        tracing::debug!(%url, action, "GET");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { action, status });
        }
        Ok(response.text()?)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// Append percent-encoded path segments to the API base URL.
/// Empty segments are skipped so `""` and `"a//b"` behave.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.to_string()))?;
        path.pop_if_empty();
        path.extend(segments.iter().copied().filter(|s| !s.is_empty()));
    }
    Ok(url)
}

fn contents_url(base: &Url, login: &str, repo: &str, path: &str) -> Result<Url> {
    let mut segments = vec!["repos", login, repo, "contents"];
    segments.extend(path.split('/'));
    endpoint(base, &segments)
}

fn search_url(base: &Url, login: &str, query: &str) -> Result<Url> {
    let mut url = endpoint(base, &["search", "repositories"])?;
    let q = format!("{} user:{}", query.trim(), login);
    url.query_pairs_mut().append_pair("q", q.trim());
    Ok(url)
}

/// Drain a paginated endpoint. Stops on an empty page or a page shorter than
/// `per_page`, which GitHub uses to mark the last one.
pub(crate) fn collect_pages<T, F>(per_page: usize, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Result<Vec<T>>,
{
    let mut all = Vec::new();
    let mut page = 1u32;
    loop {
        let items = fetch_page(page)?;
        let count = items.len();
        all.extend(items);
        if count == 0 || count < per_page {
            break;
        }
        page += 1;
    }
    Ok(all)
}

/// Decode the `{content, encoding}` body of a file. Base64 payloads carry
/// line breaks every 60 characters, which are stripped before decoding.
fn decode_file_content(body: &str) -> Result<String> {
    let payload: ContentPayload = decode(body)?;
    if payload.encoding != "base64" {
        return Ok(payload.content);
    }
    let compact: String = payload
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
