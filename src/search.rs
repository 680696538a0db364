//! Search facade
//!
//! Sequences root resolution, pattern compilation, file gathering, matching
//! and formatting, and appends the scan notices to the result.

use crate::display::formatter_for;
use crate::error::SearchError;
use crate::limits::SearchLimits;
use crate::searchers::{resolve_root, ContentSearcher, FileGatherer};
use crate::types::{OutputFormat, ScanMetadata, SearchRequest};
use log::{debug, info};

/// 文字列インターフェースの検索（ツール呼び出し用）
///
/// Errors are returned as `Error: ...` strings, never as panics.
pub fn search(pattern: &str, root: &str, format: &str, globs: &str, ignore_case: bool) -> String {
    search_with_limits(pattern, root, format, globs, ignore_case, &SearchLimits::default())
}

pub fn search_with_limits(
    pattern: &str,
    root: &str,
    format: &str,
    globs: &str,
    ignore_case: bool,
    limits: &SearchLimits,
) -> String {
    let root = if root.is_empty() { "." } else { root };
    let request = SearchRequest::new(pattern, root)
        .with_format(OutputFormat::parse(format))
        .with_globs(globs)
        .with_ignore_case(ignore_case);

    match run(&request, limits) {
        Ok(output) => output,
        Err(err) => err.to_tool_output(),
    }
}

/// 検索を実行して整形済みの結果を返す
pub fn run(request: &SearchRequest, limits: &SearchLimits) -> Result<String, SearchError> {
    if request.pattern.is_empty() {
        return Err(SearchError::MissingArgument);
    }

    let root = resolve_root(&request.root)?;
    let searcher = ContentSearcher::new(&request.pattern, request.ignore_case)?;

    info!(
        "Searching '{}' in {} (format: {}, globs: {:?}, ignore_case: {})",
        request.pattern,
        root.path().display(),
        request.format,
        request.globs,
        request.ignore_case
    );

    let candidates = FileGatherer::new(root, &request.globs, limits).gather();
    let metadata = candidates.metadata();
    debug!(
        "Gathered {} candidate files (truncated: {}, binary skipped: {})",
        candidates.files.len(),
        metadata.files_truncated,
        metadata.binary_skipped
    );

    if candidates.is_empty() {
        return Ok(empty_result(request.format, &metadata, limits));
    }

    let matches = searcher.scan_files(&candidates.files);
    if matches.is_empty() {
        return Ok(empty_result(request.format, &metadata, limits));
    }
    debug!(
        "{} matches in {} files",
        matches.total_matches(),
        matches.file_count()
    );

    let body = formatter_for(request.format, limits).format(&matches);
    Ok(append_markers(body, &metadata, limits))
}

/// "No matches found" / "0" に注記を空白区切りで付ける
fn empty_result(format: OutputFormat, metadata: &ScanMetadata, limits: &SearchLimits) -> String {
    let base = format.empty_result();
    let markers = metadata.markers(limits.max_files_scanned);
    if markers.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, markers.join(" "))
    }
}

/// 本文の次の行に注記を付ける
fn append_markers(mut body: String, metadata: &ScanMetadata, limits: &SearchLimits) -> String {
    let markers = metadata.markers(limits.max_files_scanned);
    if markers.is_empty() {
        return body;
    }
    if !body.ends_with('\n') {
        body.push('\n');
    }
    body.push_str(&markers.join(" "));
    body
}
