use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;
use std::fs;
use std::path::Path;

/// ルート直下の `.gitignore` だけを解釈するフィルタ
///
/// 読めない・壊れた `.gitignore` は存在しないものとして扱う。
pub struct GitignoreFilter {
    matcher: Option<Gitignore>,
}

impl GitignoreFilter {
    /// Filter that ignores nothing
    pub fn disabled() -> Self {
        Self { matcher: None }
    }

    /// Load `<dir>/.gitignore`, or the parent's one when `root` is a file
    pub fn load(root: &Path) -> Self {
        let dir = if root.is_dir() {
            root
        } else {
            match root.parent() {
                Some(parent) => parent,
                None => return Self::disabled(),
            }
        };

        let gitignore_path = dir.join(".gitignore");
        if !gitignore_path.is_file() {
            return Self::disabled();
        }

        Self {
            matcher: Self::build(dir, &gitignore_path),
        }
    }

    fn build(dir: &Path, gitignore_path: &Path) -> Option<Gitignore> {
        let bytes = match fs::read(gitignore_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Ignoring unreadable {}: {}", gitignore_path.display(), e);
                return None;
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        let mut builder = GitignoreBuilder::new(dir);
        for line in content.lines() {
            if let Err(e) = builder.add_line(Some(gitignore_path.to_path_buf()), line) {
                debug!("Ignoring malformed {}: {}", gitignore_path.display(), e);
                return None;
            }
        }

        match builder.build() {
            Ok(gitignore) => Some(gitignore),
            Err(e) => {
                debug!("Ignoring malformed {}: {}", gitignore_path.display(), e);
                None
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.matcher.is_some()
    }

    /// `relative_path` はルートからの相対パス
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };
        if relative_path.has_root() {
            return false;
        }
        matcher
            .matched_path_or_any_parents(relative_path, false)
            .is_ignore()
    }
}
