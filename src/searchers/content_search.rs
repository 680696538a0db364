use crate::error::SearchError;
use crate::types::{LineMatch, MatchIndex};
use log::debug;
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 正規表現をコンパイル（multi-line 常時有効）
pub fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex, SearchError> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|e| SearchError::InvalidPattern(e.to_string()))
}

/// コンテンツ検索エンジン（grep風）
pub struct ContentSearcher {
    regex: Regex,
}

impl ContentSearcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, SearchError> {
        Ok(Self {
            regex: compile_pattern(pattern, ignore_case)?,
        })
    }

    /// 全候補ファイルを順に検索
    pub fn scan_files(&self, files: &[PathBuf]) -> MatchIndex {
        let mut index = MatchIndex::new();
        for path in files {
            let Some(lines) = self.search_in_file(path) else {
                continue;
            };
            index.insert(path, lines);
        }
        index
    }

    /// 単一ファイル内の検索
    ///
    /// Returns `None` when the file cannot be opened. Invalid UTF-8 is
    /// replaced, and a read error ends the file with what was collected.
    fn search_in_file(&self, path: &Path) -> Option<Vec<LineMatch>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };

        let mut reader = BufReader::new(file);
        let mut buffer = Vec::new();
        let mut results = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    debug!("Stopped reading {}: {}", path.display(), e);
                    break;
                }
            }
            // 単独の \r も改行として扱う
            for segment in strip_line_ending(&buffer).split(|b| *b == b'\r') {
                line_number += 1;
                let line = String::from_utf8_lossy(segment);
                if self.regex.is_match(&line) {
                    results.push(LineMatch {
                        line_number,
                        text: line.into_owned(),
                    });
                }
            }
        }

        Some(results)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
