use crate::error::SearchError;
use crate::filters::{is_skipped_dir, FileFilter, GitignoreFilter};
use crate::limits::SearchLimits;
use crate::types::CandidateFileSet;
use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// 検索ルートの種別
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRoot {
    /// 単一ファイル（フィルタは適用しない）
    File(PathBuf),
    /// 再帰的に走査するディレクトリ
    Directory(PathBuf),
}

impl ResolvedRoot {
    pub fn path(&self) -> &Path {
        match self {
            ResolvedRoot::File(path) | ResolvedRoot::Directory(path) => path,
        }
    }
}

/// Validate the search root and classify it.
///
/// Relative roots are made absolute against the current directory; symlinks
/// are kept as given.
pub fn resolve_root(root: &Path) -> Result<ResolvedRoot, SearchError> {
    if !root.exists() {
        return Err(SearchError::PathNotFound(root.to_path_buf()));
    }

    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    if absolute.is_file() {
        Ok(ResolvedRoot::File(absolute))
    } else {
        Ok(ResolvedRoot::Directory(absolute))
    }
}

/// 候補ファイルの収集
///
/// 走査は逐次・ファイル名順。上限に達した時点で打ち切る。
pub struct FileGatherer {
    root: ResolvedRoot,
    gitignore: GitignoreFilter,
    file_filter: FileFilter,
    max_files: usize,
}

impl FileGatherer {
    pub fn new(root: ResolvedRoot, globs: &[String], limits: &SearchLimits) -> Self {
        let gitignore = match &root {
            ResolvedRoot::Directory(dir) => GitignoreFilter::load(dir),
            ResolvedRoot::File(_) => GitignoreFilter::disabled(),
        };
        debug!("Root .gitignore active: {}", gitignore.is_active());

        Self {
            root,
            gitignore,
            file_filter: FileFilter::new(globs, limits.binary_sniff_bytes),
            max_files: limits.max_files_scanned,
        }
    }

    pub fn gather(&self) -> CandidateFileSet {
        match &self.root {
            ResolvedRoot::File(path) => CandidateFileSet::single(path.clone()),
            ResolvedRoot::Directory(dir) => self.walk_directory(dir),
        }
    }

    fn walk_directory(&self, dir: &Path) -> CandidateFileSet {
        let mut candidates = CandidateFileSet::default();

        let walker = WalkBuilder::new(dir)
            .standard_filters(false) // .gitignore はルートのものだけ自前で扱う
            .hidden(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && entry.file_name().to_str().is_some_and(is_skipped_dir))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let path = entry.path();
            if entry.depth() == 0 || !path.is_file() {
                continue;
            }

            let relative_path = path.strip_prefix(dir).unwrap_or(path);
            if self.gitignore.is_ignored(relative_path) {
                continue;
            }
            if !self.file_filter.matches_patterns(relative_path, path) {
                continue;
            }
            if self.file_filter.is_binary(path) {
                candidates.binary_skipped += 1;
                continue;
            }

            candidates.files.push(path.to_path_buf());
            if candidates.files.len() >= self.max_files {
                debug!("File scan truncated at {} files", self.max_files);
                candidates.files_truncated = true;
                break;
            }
        }

        candidates
    }
}
