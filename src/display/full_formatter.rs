use super::traits::MatchFormatter;
use super::utils::{read_lossy, truncate_chars};
use crate::types::{MatchIndex, NO_MATCHES};

/// ファイル全体を出力
///
/// Content size is counted in characters. The per-file marker counts toward
/// the aggregate budget; once the aggregate budget is exceeded the current
/// file is cut and no further files are emitted.
pub struct FullFormatter {
    max_files: usize,
    per_file_chars: usize,
    total_chars: usize,
}

impl FullFormatter {
    pub fn new(max_files: usize, per_file_chars: usize, total_chars: usize) -> Self {
        Self {
            max_files,
            per_file_chars,
            total_chars,
        }
    }

    fn chunk(path: &str, content: &str) -> String {
        format!("FILE: {}\n---\n{}", path, content)
            .trim_end()
            .to_string()
    }
}

impl MatchFormatter for FullFormatter {
    fn name(&self) -> &'static str {
        "full"
    }

    fn format(&self, matches: &MatchIndex) -> String {
        let mut chunks: Vec<String> = Vec::new();
        let mut emitted_chars = 0;
        let mut aggregate_truncated = false;

        for (path, file) in matches.iter().take(self.max_files) {
            let Some(mut content) = read_lossy(&file.path) else {
                continue;
            };

            if content.chars().count() > self.per_file_chars {
                content = format!(
                    "{}\n[truncated file content at {} chars]",
                    truncate_chars(&content, self.per_file_chars),
                    self.per_file_chars
                );
            }

            let content_chars = content.chars().count();
            if emitted_chars + content_chars > self.total_chars {
                let remaining = self.total_chars.saturating_sub(emitted_chars);
                let cut = format!(
                    "{}\n[truncated aggregate content at {} chars]",
                    truncate_chars(&content, remaining),
                    self.total_chars
                );
                chunks.push(Self::chunk(path, &cut));
                aggregate_truncated = true;
                break;
            }

            emitted_chars += content_chars;
            chunks.push(Self::chunk(path, &content));
        }

        let mut output = if chunks.is_empty() {
            NO_MATCHES.to_string()
        } else {
            chunks.join("\n\n")
        };

        // 集計上限のマーカーが出ている場合はファイル数のマーカーを出さない
        if !aggregate_truncated && matches.file_count() > self.max_files {
            output.push_str(&format!("\n\n[truncated file list at {}]", self.max_files));
        }

        output
    }
}
