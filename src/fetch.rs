//! Fetch requests emitted by the state machine and the outcomes fed back to it.
//!
//! A [`FetchRequest`] owns copies of every parameter it needs, taken when the
//! transition emitted it, so a background thread never observes later edits to
//! the session. [`spawn`] runs one request on its own thread and delivers the
//! [`FetchOutcome`] over a channel to the event loop.

use std::sync::mpsc;

use crate::github::{self, ApiError, Entry, GitHubClient, Profile, Repository};

/// The five API calls the navigation engine depends on
pub trait Gateway {
    fn profile(&self, id: &str) -> github::Result<Profile>;
    fn repositories(&self, login: &str) -> github::Result<Vec<Repository>>;
    fn directory(&self, login: &str, repo: &str, path: &str) -> github::Result<Vec<Entry>>;
    fn file_content(&self, login: &str, repo: &str, path: &str) -> github::Result<String>;
    fn search(&self, login: &str, query: &str) -> github::Result<Vec<Repository>>;
}

impl Gateway for GitHubClient {
    fn profile(&self, id: &str) -> github::Result<Profile> {
        GitHubClient::profile(self, id)
    }

    fn repositories(&self, login: &str) -> github::Result<Vec<Repository>> {
        GitHubClient::repositories(self, login)
    }

    fn directory(&self, login: &str, repo: &str, path: &str) -> github::Result<Vec<Entry>> {
        GitHubClient::directory(self, login, repo, path)
    }

    fn file_content(&self, login: &str, repo: &str, path: &str) -> github::Result<String> {
        GitHubClient::file_content(self, login, repo, path)
    }

    fn search(&self, login: &str, query: &str) -> github::Result<Vec<Repository>> {
        GitHubClient::search(self, login, query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Profile { id: String },
    Repositories { login: String },
    Directory { login: String, repo: String, path: String },
    FileContent { login: String, repo: String, path: String },
    Search { login: String, query: String },
}

impl FetchRequest {
    pub fn label(&self) -> &'static str {
        match self {
            FetchRequest::Profile { .. } => "profile",
            FetchRequest::Repositories { .. } => "repositories",
            FetchRequest::Directory { .. } => "directory",
            FetchRequest::FileContent { .. } => "file",
            FetchRequest::Search { .. } => "search",
        }
    }

    /// Run the request to completion on the calling thread
    pub fn execute<G: Gateway + ?Sized>(&self, gateway: &G) -> FetchOutcome {
        match self {
            FetchRequest::Profile { id } => FetchOutcome::Profile(gateway.profile(id)),
            FetchRequest::Repositories { login } => {
                FetchOutcome::Repositories(gateway.repositories(login))
            }
            FetchRequest::Directory { login, repo, path } => {
                FetchOutcome::Directory(gateway.directory(login, repo, path))
            }
            FetchRequest::FileContent { login, repo, path } => {
                FetchOutcome::FileContent(gateway.file_content(login, repo, path))
            }
            FetchRequest::Search { login, query } => {
                FetchOutcome::Search(gateway.search(login, query))
            }
        }
    }
}

/// Completed fetch, delivered back into the state machine as an input
#[derive(Debug)]
pub enum FetchOutcome {
    Profile(Result<Profile, ApiError>),
    Repositories(Result<Vec<Repository>, ApiError>),
    Directory(Result<Vec<Entry>, ApiError>),
    FileContent(Result<String, ApiError>),
    Search(Result<Vec<Repository>, ApiError>),
}

impl FetchOutcome {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchOutcome::Profile(r) => r.as_ref().err(),
            FetchOutcome::Repositories(r) => r.as_ref().err(),
            FetchOutcome::Directory(r) => r.as_ref().err(),
            FetchOutcome::FileContent(r) => r.as_ref().err(),
            FetchOutcome::Search(r) => r.as_ref().err(),
        }
    }
}

/// Execute `request` on a background thread. The outcome is sent on `tx`;
/// if the receiver is gone (the UI already quit) it is dropped.
pub fn spawn<G>(gateway: G, request: FetchRequest, tx: mpsc::Sender<FetchOutcome>)
where
    G: Gateway + Send + 'static,
{
    std::thread::spawn(move || {
        let label = request.label();
        tracing::debug!(?request, "fetch started");
        let outcome = request.execute(&gateway);
        match outcome.error() {
            Some(err) => tracing::warn!(fetch = label, error = %err, "fetch failed"),
            None => tracing::debug!(fetch = label, "fetch completed"),
        }
        let _ = tx.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::EntryKind;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every call and answers with canned data
    #[derive(Clone, Default)]
    struct FakeGateway {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl FakeGateway {
        fn record(&self, call: String) -> github::Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(ApiError::Status {
                    action: "fetch profile",
                    status: StatusCode::NOT_FOUND,
                })
            } else {
                Ok(())
            }
        }
    }

    impl Gateway for FakeGateway {
        fn profile(&self, id: &str) -> github::Result<Profile> {
            self.record(format!("profile {id}"))?;
            Ok(Profile {
                name: None,
                login: id.to_string(),
                bio: None,
                followers: 1,
                following: 2,
            })
        }

        fn repositories(&self, login: &str) -> github::Result<Vec<Repository>> {
            self.record(format!("repos {login}"))?;
            Ok(vec![Repository {
                name: "A".into(),
                description: None,
            }])
        }

        fn directory(&self, login: &str, repo: &str, path: &str) -> github::Result<Vec<Entry>> {
            self.record(format!("dir {login}/{repo}:{path}"))?;
            Ok(vec![Entry {
                name: "src".into(),
                kind: EntryKind::Dir,
            }])
        }

        fn file_content(&self, login: &str, repo: &str, path: &str) -> github::Result<String> {
            self.record(format!("file {login}/{repo}:{path}"))?;
            Ok("fn main() {}".into())
        }

        fn search(&self, login: &str, query: &str) -> github::Result<Vec<Repository>> {
            self.record(format!("search {login}:{query}"))?;
            Ok(vec![])
        }
    }

    #[test]
    fn execute_routes_each_request_to_its_call() {
        let gw = FakeGateway::default();
        let requests = vec![
            FetchRequest::Profile { id: "octocat".into() },
            FetchRequest::Repositories { login: "octocat".into() },
            FetchRequest::Directory {
                login: "octocat".into(),
                repo: "r".into(),
                path: "src".into(),
            },
            FetchRequest::FileContent {
                login: "octocat".into(),
                repo: "r".into(),
                path: "src/main.rs".into(),
            },
            FetchRequest::Search {
                login: "octocat".into(),
                query: "cli".into(),
            },
        ];
        for r in &requests {
            r.execute(&gw);
        }
        assert_eq!(
            *gw.calls.lock().unwrap(),
            vec![
                "profile octocat",
                "repos octocat",
                "dir octocat/r:src",
                "file octocat/r:src/main.rs",
                "search octocat:cli",
            ]
        );
    }

    #[test]
    fn execute_wraps_result_in_matching_outcome() {
        let gw = FakeGateway::default();
        let outcome = FetchRequest::FileContent {
            login: "o".into(),
            repo: "r".into(),
            path: "a.txt".into(),
        }
        .execute(&gw);
        match outcome {
            FetchOutcome::FileContent(Ok(text)) => assert_eq!(text, "fn main() {}"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn outcome_error_exposes_failure() {
        let gw = FakeGateway {
            fail: true,
            ..FakeGateway::default()
        };
        let outcome = FetchRequest::Profile { id: "nobody".into() }.execute(&gw);
        let err = outcome.error().expect("failure expected");
        assert_eq!(err.to_string(), "failed to fetch profile: 404 Not Found");
    }

    #[test]
    fn spawn_delivers_outcome_over_channel() {
        let gw = FakeGateway::default();
        let (tx, rx) = mpsc::channel();
        spawn(gw.clone(), FetchRequest::Repositories { login: "octocat".into() }, tx);
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome, FetchOutcome::Repositories(Ok(ref r)) if r.len() == 1));
        assert_eq!(*gw.calls.lock().unwrap(), vec!["repos octocat"]);
    }

    #[test]
    fn labels() {
        assert_eq!(FetchRequest::Profile { id: "x".into() }.label(), "profile");
        assert_eq!(
            FetchRequest::Search {
                login: "x".into(),
                query: "y".into()
            }
            .label(),
            "search"
        );
    }
}
