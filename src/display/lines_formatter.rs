use super::traits::MatchFormatter;
use crate::types::{MatchIndex, NO_MATCHES};

/// ファイル名:行番号:内容 形式
pub struct LinesFormatter {
    max_lines: usize,
}

impl LinesFormatter {
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

impl MatchFormatter for LinesFormatter {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn format(&self, matches: &MatchIndex) -> String {
        let mut lines: Vec<String> = Vec::new();

        for (path, file) in matches {
            for line in &file.lines {
                if lines.len() >= self.max_lines {
                    return format!(
                        "{}\n[truncated at {} matches]",
                        lines.join("\n"),
                        self.max_lines
                    );
                }
                lines.push(format!("{}:{}:{}", path, line.line_number, line.text.trim()));
            }
        }

        if lines.is_empty() {
            NO_MATCHES.to_string()
        } else {
            lines.join("\n")
        }
    }
}
