use serde::{Deserialize, Serialize};

/// Caps applied by the gatherer and the formatters.
///
/// `Default` carries the canonical values used by the `search` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Stop walking once this many candidate files were collected
    pub max_files_scanned: usize,
    /// Prefix length inspected for NUL bytes
    pub binary_sniff_bytes: usize,
    pub lines_max: usize,
    pub context_lines: usize,
    pub context_blocks_max: usize,
    pub count_files_max: usize,
    pub full_files_max: usize,
    pub full_total_chars_max: usize,
    pub full_per_file_chars_max: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_files_scanned: 5000,
            binary_sniff_bytes: 1024,
            lines_max: 200,
            context_lines: 5,
            context_blocks_max: 50,
            count_files_max: 50,
            full_files_max: 10,
            full_total_chars_max: 120_000,
            full_per_file_chars_max: 20_000,
        }
    }
}
