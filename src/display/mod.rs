/// フォーマッターモジュール
///
/// 情報量の少ない順に count / lines / context / full の4種類。

mod context_formatter;
mod count_formatter;
mod full_formatter;
mod lines_formatter;
mod traits;
mod utils;

use crate::limits::SearchLimits;
use crate::types::OutputFormat;

// パブリックAPIをエクスポート
pub use context_formatter::ContextFormatter;
pub use count_formatter::CountFormatter;
pub use full_formatter::FullFormatter;
pub use lines_formatter::LinesFormatter;
pub use traits::MatchFormatter;

// テスト用に一部の関数もエクスポート
pub use utils::{read_lines_lossy, read_lossy, truncate_chars};

/// フォーマット指定に対応するフォーマッターを作成
pub fn formatter_for(format: OutputFormat, limits: &SearchLimits) -> Box<dyn MatchFormatter> {
    match format {
        OutputFormat::Count => Box::new(CountFormatter::new(limits.count_files_max)),
        OutputFormat::Lines => Box::new(LinesFormatter::new(limits.lines_max)),
        OutputFormat::Context => Box::new(ContextFormatter::new(
            limits.context_lines,
            limits.context_blocks_max,
        )),
        OutputFormat::Full => Box::new(FullFormatter::new(
            limits.full_files_max,
            limits.full_per_file_chars_max,
            limits.full_total_chars_max,
        )),
    }
}
