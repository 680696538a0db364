use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// 出力フォーマット（情報量の少ない順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TOTAL + per-file match counts
    #[default]
    Count,
    /// path:line:code
    Lines,
    /// Matched line with surrounding lines
    Context,
    /// Whole file bodies
    Full,
}

impl OutputFormat {
    /// 文字列からフォーマットを決定（不明な値は `Count`）
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lines" => OutputFormat::Lines,
            "context" => OutputFormat::Context,
            "full" => OutputFormat::Full,
            _ => OutputFormat::Count,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Count => "count",
            OutputFormat::Lines => "lines",
            OutputFormat::Context => "context",
            OutputFormat::Full => "full",
        }
    }

    /// マッチがない場合の出力
    pub fn empty_result(&self) -> &'static str {
        match self {
            OutputFormat::Count => "0",
            _ => NO_MATCHES,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const NO_MATCHES: &str = "No matches found";

/// 1回の検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub pattern: String,
    pub root: PathBuf,
    pub format: OutputFormat,
    pub globs: Vec<String>,
    pub ignore_case: bool,
}

impl SearchRequest {
    pub fn new(pattern: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
            root: root.into(),
            format: OutputFormat::default(),
            globs: Vec::new(),
            ignore_case: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// カンマ区切りのglob指定を設定
    pub fn with_globs(mut self, globs: &str) -> Self {
        self.globs = split_globs(globs);
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// "src/**/*.rs, *.md" -> ["src/**/*.rs", "*.md"]
pub fn split_globs(globs: &str) -> Vec<String> {
    globs
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// 走査で得られた候補ファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFileSet {
    pub files: Vec<PathBuf>,
    pub files_truncated: bool,
    pub binary_skipped: usize,
}

impl CandidateFileSet {
    pub fn single(path: PathBuf) -> Self {
        Self {
            files: vec![path],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn metadata(&self) -> ScanMetadata {
        ScanMetadata {
            files_truncated: self.files_truncated,
            binary_skipped: self.binary_skipped,
        }
    }
}

/// 走査結果の注記
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanMetadata {
    pub files_truncated: bool,
    pub binary_skipped: usize,
}

impl ScanMetadata {
    /// Bracketed notices appended after the formatted body
    pub fn markers(&self, max_files_scanned: usize) -> Vec<String> {
        let mut markers = Vec::new();
        if self.files_truncated {
            markers.push(format!("[truncated file scan at {}]", max_files_scanned));
        }
        if self.binary_skipped > 0 {
            markers.push(format!("[skipped {} binary files]", self.binary_skipped));
        }
        markers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1ベース
    pub line_number: usize,
    pub text: String,
}

/// One file's matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub path: PathBuf,
    pub lines: Vec<LineMatch>,
}

/// ファイルごとのマッチ行
///
/// Iteration order is the lexicographic order of each path's string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    entries: BTreeMap<String, FileMatches>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1ファイル分のマッチを登録（空なら何もしない）
    pub fn insert(&mut self, path: &Path, lines: Vec<LineMatch>) {
        if lines.is_empty() {
            return;
        }
        let key = display_path(path);
        let entry = self.entries.entry(key).or_insert_with(|| FileMatches {
            path: path.to_path_buf(),
            lines: Vec::new(),
        });
        entry.lines.extend(lines);
        entry.lines.sort_by_key(|m| m.line_number);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// マッチしたファイル数
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_matches(&self) -> usize {
        self.entries.values().map(|f| f.lines.len()).sum()
    }

    pub fn get(&self, path: &Path) -> Option<&FileMatches> {
        self.entries.get(&display_path(path))
    }

    /// (表示用パス, マッチ) をパス順に返す
    pub fn iter(&self) -> btree_map::Iter<'_, String, FileMatches> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MatchIndex {
    type Item = (&'a String, &'a FileMatches);
    type IntoIter = btree_map::Iter<'a, String, FileMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
