use std::fs;
use std::path::Path;

/// ファイル全体を読み込み（不正なUTF-8は置換）
pub fn read_lossy(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// 行単位で読み込み（改行文字は除去）
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_lines_lossy(path: &Path) -> Option<Vec<String>> {
    let content = read_lossy(path)?;
    Some(split_lines(&content).map(str::to_string).collect())
}

pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n').flat_map(|chunk| {
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        chunk.split('\r')
    })
}

/// 先頭 `max_chars` 文字に切り詰め（UTF-8安全）
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
