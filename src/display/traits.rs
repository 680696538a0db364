use crate::types::MatchIndex;

/// マッチ結果を1つの文字列に整形する
pub trait MatchFormatter {
    /// Format name as accepted by `OutputFormat::parse`
    fn name(&self) -> &'static str;

    fn format(&self, matches: &MatchIndex) -> String;
}
