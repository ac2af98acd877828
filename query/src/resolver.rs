use crate::config::QueryConfig;
use crate::cursor::decode_cursor;
use crate::cursor::encode_cursor;
use crate::error::Result;
use crate::proto::Hover;
use crate::proto::Location;
use crate::proto::PagedPositionArgs;
use crate::proto::PositionArgs;
use crate::proto::ReferencePage;
use crate::proto::Upload;
use crate::source::DiffSource;
use crate::source::IntelSource;
use crate::source::SourceQuery;
use commitlens_diff::Position;
use commitlens_diff::parse_file_diff;
use commitlens_diff::translate_position;
use std::collections::HashMap;
use tracing::debug;

/// Resolves code-intelligence queries for one (repo, commit, path) against a
/// set of indexed uploads.
///
/// All state is request-local: the resolver owns its upload list and
/// accumulators, and pagination state lives entirely in the cursor handed
/// back to the caller. Dropping a resolver future abandons any in-flight
/// diff subprocess or source RPC without emitting a partial cursor.
pub struct QueryResolver<D, S> {
    repo_id: i64,
    /// The commit whose coordinate space incoming positions use.
    commit: String,
    path: String,
    /// Ordered by ascending commit distance from `commit`; this order is an
    /// input invariant and is never changed here.
    uploads: Vec<Upload>,
    diff_source: D,
    intel_source: S,
    config: QueryConfig,
}

impl<D: DiffSource, S: IntelSource> QueryResolver<D, S> {
    pub fn new(
        repo_id: i64,
        commit: impl Into<String>,
        path: impl Into<String>,
        uploads: Vec<Upload>,
        diff_source: D,
        intel_source: S,
        config: QueryConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repo_id,
            commit: commit.into(),
            path: path.into(),
            uploads,
            diff_source,
            intel_source,
            config,
        })
    }

    /// Queries uploads in order and returns the first non-empty definition
    /// set. Uploads whose index cannot see the requested line are skipped;
    /// an empty vec means no upload had an answer.
    pub async fn definitions(&self, args: PositionArgs) -> Result<Vec<Location>> {
        for upload in &self.uploads {
            let Some(position) = self.translate_for_upload(upload, args.line, args.character).await?
            else {
                continue;
            };

            let locations = self
                .intel_source
                .definitions(&self.source_query(upload, position))
                .await?;
            if !locations.is_empty() {
                return Ok(locations);
            }
        }

        Ok(Vec::new())
    }

    /// Queries uploads in order and returns the first non-empty hover text.
    pub async fn hover(&self, args: PositionArgs) -> Result<Option<Hover>> {
        for upload in &self.uploads {
            let Some(position) = self.translate_for_upload(upload, args.line, args.character).await?
            else {
                continue;
            };

            if let Some(hover) = self
                .intel_source
                .hover(&self.source_query(upload, position))
                .await?
            {
                if !hover.text.is_empty() {
                    return Ok(Some(hover));
                }
            }
        }

        Ok(None)
    }

    /// Accumulates one page of references across all uploads.
    ///
    /// The inbound cursor maps upload id to that upload's resume token. An
    /// upload missing from a non-empty mapping contributed everything it had
    /// on an earlier page (or postdates the current page boundary), so it is
    /// skipped wholesale — querying it again would yield duplicates or
    /// out-of-order results.
    pub async fn references(&self, args: PagedPositionArgs) -> Result<ReferencePage> {
        let resume_tokens = decode_cursor(args.after.as_deref())?;
        let limit = self.config.page_size(args.first);

        let mut next_tokens: HashMap<i64, String> = HashMap::new();
        let mut all_locations: Vec<Location> = Vec::new();

        for upload in &self.uploads {
            let resume_token = match resume_tokens.get(&upload.id) {
                Some(token) => Some(token.as_str()),
                // First page: every upload participates.
                None if resume_tokens.is_empty() => None,
                None => {
                    debug!(
                        upload_id = upload.id,
                        "upload exhausted on a prior page; skipping"
                    );
                    continue;
                }
            };

            let Some(position) = self.translate_for_upload(upload, args.line, args.character).await?
            else {
                continue;
            };

            let page = self
                .intel_source
                .references(&self.source_query(upload, position), limit, resume_token)
                .await?;
            all_locations.extend(page.locations);

            if let Some(token) = page.end_cursor {
                if !token.is_empty() {
                    next_tokens.insert(upload.id, token);
                }
            }
        }

        let encoded = encode_cursor(&next_tokens)?;
        Ok(ReferencePage {
            locations: all_locations,
            end_cursor: if encoded.is_empty() {
                None
            } else {
                Some(encoded)
            },
        })
    }

    /// Maps the requested position into `upload`'s coordinate space.
    ///
    /// `Ok(None)` means the line was changed between the two commits and has
    /// no stable counterpart; callers skip that upload and move on. Every
    /// other failure (diff retrieval, parse, malformed hunk) is fatal.
    async fn translate_for_upload(
        &self,
        upload: &Upload,
        line: i32,
        character: i32,
    ) -> Result<Option<Position>> {
        if upload.commit == self.commit {
            // This exact commit is indexed; nothing to translate.
            return Ok(Some(Position { line, character }));
        }

        let diff_text = self
            .diff_source
            .diff(&self.commit, &upload.commit, &self.path)
            .await?;
        let hunks = parse_file_diff(&diff_text)?;
        let translated = translate_position(&hunks, Position { line, character })?;

        if translated.is_none() {
            debug!(
                upload_id = upload.id,
                upload_commit = %upload.commit,
                line,
                "line has no stable mapping in upload's commit; skipping upload"
            );
        }
        Ok(translated)
    }

    fn source_query(&self, upload: &Upload, position: Position) -> SourceQuery {
        SourceQuery {
            repo_id: self.repo_id,
            commit: self.commit.clone(),
            path: self.path.clone(),
            line: position.line,
            character: position.character,
            upload_id: upload.id,
        }
    }
}
