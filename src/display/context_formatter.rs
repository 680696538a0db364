use super::traits::MatchFormatter;
use super::utils::read_lines_lossy;
use crate::types::{MatchIndex, NO_MATCHES};

/// マッチ行の前後を含むブロック形式
///
/// ```text
/// FILE: src/config/retry.py
/// ---
///      18: MAX_RETRY = 5
/// =>   19: RETRY_POLICY = {"max": MAX_RETRY}
///      20: DEFAULT_TIMEOUT = 30
/// ```
pub struct ContextFormatter {
    context_lines: usize,
    max_blocks: usize,
}

impl ContextFormatter {
    pub fn new(context_lines: usize, max_blocks: usize) -> Self {
        Self {
            context_lines,
            max_blocks,
        }
    }

    fn render_block(&self, path: &str, all_lines: &[String], line_number: usize) -> String {
        let start = line_number.saturating_sub(self.context_lines).max(1);
        let end = (line_number + self.context_lines).min(all_lines.len());

        let mut block = format!("FILE: {}\n---", path);
        for i in start..=end {
            let prefix = if i == line_number { "=>" } else { "  " };
            block.push_str(&format!("\n{}{:>5}: {}", prefix, i, all_lines[i - 1]));
        }
        block
    }
}

impl MatchFormatter for ContextFormatter {
    fn name(&self) -> &'static str {
        "context"
    }

    fn format(&self, matches: &MatchIndex) -> String {
        let mut blocks: Vec<String> = Vec::new();

        for (path, file) in matches {
            // ファイルを読み直す（読めなければスキップ）
            let Some(all_lines) = read_lines_lossy(&file.path) else {
                continue;
            };

            for line in &file.lines {
                if blocks.len() >= self.max_blocks {
                    return format!(
                        "{}\n\n[truncated at {} blocks]",
                        blocks.join("\n\n"),
                        self.max_blocks
                    );
                }
                blocks.push(self.render_block(path, &all_lines, line.line_number));
            }
        }

        if blocks.is_empty() {
            NO_MATCHES.to_string()
        } else {
            blocks.join("\n\n")
        }
    }
}
