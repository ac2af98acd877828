use crate::error::QueryError;
use crate::error::Result;
use crate::proto::Hover;
use crate::proto::Location;
use crate::proto::ReferencePage;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

/// Produces unified-diff text between two commits, restricted to one path.
///
/// `old_commit` becomes the diff's original side and `new_commit` its new
/// side. Commit identifiers are passed through untouched; the resolver never
/// interprets them beyond an equality check.
#[async_trait]
pub trait DiffSource: Send + Sync {
    async fn diff(&self, old_commit: &str, new_commit: &str, path: &str) -> Result<String>;
}

/// Parameters common to every indexed-source query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceQuery {
    pub repo_id: i64,
    /// The commit the caller is browsing, not the upload's commit.
    pub commit: String,
    pub path: String,
    /// Position already translated into the upload's coordinate space.
    pub line: i32,
    pub character: i32,
    pub upload_id: i64,
}

/// RPC surface of an indexed upload.
#[async_trait]
pub trait IntelSource: Send + Sync {
    async fn definitions(&self, query: &SourceQuery) -> Result<Vec<Location>>;

    async fn references(
        &self,
        query: &SourceQuery,
        limit: i32,
        resume_token: Option<&str>,
    ) -> Result<ReferencePage>;

    async fn hover(&self, query: &SourceQuery) -> Result<Option<Hover>>;
}

/// [`DiffSource`] backed by a `git diff` subprocess in a local checkout.
#[derive(Clone, Debug)]
pub struct GitDiffSource {
    repo_dir: PathBuf,
}

impl GitDiffSource {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

#[async_trait]
impl DiffSource for GitDiffSource {
    async fn diff(&self, old_commit: &str, new_commit: &str, path: &str) -> Result<String> {
        let output = Command::new("git")
            .arg("diff")
            .arg(old_commit)
            .arg(new_commit)
            .arg("--")
            .arg(path)
            .current_dir(&self.repo_dir)
            .output()
            .await
            .map_err(|err| QueryError::DiffUnavailable(err.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QueryError::DiffUnavailable(format!(
                "git diff {old_commit} {new_commit} -- {path}: {}",
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
