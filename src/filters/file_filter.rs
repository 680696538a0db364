use glob::Pattern;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// glob 絞り込みとバイナリ判定
pub struct FileFilter {
    patterns: Vec<Pattern>,
    /// 指定されたglobの数（無効なものを含む）
    requested: usize,
    sniff_bytes: usize,
}

impl FileFilter {
    pub fn new(globs: &[String], sniff_bytes: usize) -> Self {
        let patterns = globs
            .iter()
            .filter_map(|g| match compile_glob(g) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    debug!("Skipping invalid glob '{}': {}", g, e);
                    None
                }
            })
            .collect();

        Self {
            patterns,
            requested: globs.len(),
            sniff_bytes,
        }
    }

    /// Check if file matches the given glob patterns
    ///
    /// The root-relative path, the file name and the full path are each
    /// tried against every pattern. With no globs every file passes.
    pub fn matches_patterns(&self, relative_path: &Path, full_path: &Path) -> bool {
        if self.requested == 0 {
            return true;
        }

        let file_name = full_path.file_name().map(Path::new);
        self.patterns.iter().any(|pattern| {
            pattern.matches_path(relative_path)
                || file_name.is_some_and(|name| pattern.matches_path(name))
                || pattern.matches_path(full_path)
        })
    }

    /// 先頭バイトにNULが含まれていればバイナリ
    ///
    /// 読めないファイルはテキスト扱い（走査時にスキップされる）。
    pub fn is_binary(&self, path: &Path) -> bool {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return false,
        };

        let mut buffer = Vec::with_capacity(self.sniff_bytes);
        if file
            .take(self.sniff_bytes as u64)
            .read_to_end(&mut buffer)
            .is_err()
        {
            return false;
        }

        buffer.contains(&0)
    }
}

/// globをコンパイル
///
/// `**` inside a path component (`**.py`, `src/**.py`) is rejected by
/// `glob::Pattern`; it is retried as `*`, which already crosses `/`.
fn compile_glob(glob: &str) -> Result<Pattern, glob::PatternError> {
    match Pattern::new(glob) {
        Ok(pattern) => Ok(pattern),
        Err(e) => {
            let relaxed = relax_recursive_wildcards(glob);
            if relaxed == glob {
                return Err(e);
            }
            debug!("Retrying glob '{}' as '{}'", glob, relaxed);
            Pattern::new(&relaxed)
        }
    }
}

/// 単独コンポーネントでない `**` を `*` に置き換える
fn relax_recursive_wildcards(glob: &str) -> String {
    glob.split('/')
        .map(|component| {
            if component == "**" {
                return component.to_string();
            }
            let mut relaxed = component.to_string();
            while relaxed.contains("**") {
                relaxed = relaxed.replace("**", "*");
            }
            relaxed
        })
        .collect::<Vec<_>>()
        .join("/")
}
