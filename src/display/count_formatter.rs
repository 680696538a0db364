use super::traits::MatchFormatter;
use crate::types::MatchIndex;

/// 件数のみ（TOTAL + ファイルごとの件数）
pub struct CountFormatter {
    max_files: usize,
}

impl CountFormatter {
    pub fn new(max_files: usize) -> Self {
        Self { max_files }
    }
}

impl MatchFormatter for CountFormatter {
    fn name(&self) -> &'static str {
        "count"
    }

    fn format(&self, matches: &MatchIndex) -> String {
        if matches.is_empty() {
            return "0".to_string();
        }

        let mut counts: Vec<(&str, usize)> = matches
            .iter()
            .map(|(path, file)| (path.as_str(), file.lines.len()))
            .collect();
        // 件数の多い順、同数ならパス順
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        // TOTAL は表示を切り詰める前の合計
        let total: usize = counts.iter().map(|(_, count)| count).sum();

        let mut lines = Vec::with_capacity(counts.len().min(self.max_files) + 2);
        lines.push(format!("TOTAL:{}", total));
        lines.extend(
            counts
                .iter()
                .take(self.max_files)
                .map(|(path, count)| format!("{}:{}", count, path)),
        );
        if counts.len() > self.max_files {
            lines.push(format!("[truncated file list at {}]", self.max_files));
        }

        lines.join("\n")
    }
}
