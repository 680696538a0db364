// 検索ツールの結合テスト
// search() の文字列インターフェースを通して各フォーマットとフィルタを検証

use codesift::{search, search_with_limits, SearchLimits};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_CODE: &str = "\nclass Alpha:\n    pass\n\nclass Beta:\n    def run(self):\n        print('running Beta')\n\n# TODO: Beta improvement\n";

const SAMPLE_CODE_2: &str = "\nfunction utilBeta() {\n  // beta helper\n  return 42;\n}\n";

fn create_sample_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("sample1.py"), SAMPLE_CODE)?;
    fs::write(temp_dir.path().join("sample2.js"), SAMPLE_CODE_2)?;
    Ok(temp_dir)
}

fn root_of(temp_dir: &TempDir) -> String {
    temp_dir.path().to_string_lossy().to_string()
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod output_formats {
    use super::*;

    #[test]
    fn lines_format_lists_matching_lines_only() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;
        let sample1 = path_str(&temp_dir.path().join("sample1.py"));

        let out = search("Beta", &root_of(&temp_dir), "lines", "", false);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("{}:5:class Beta:", sample1),
                format!("{}:7:print('running Beta')", sample1),
                format!("{}:9:# TODO: Beta improvement", sample1),
            ]
        );
        assert!(!out.contains("sample2.js"));
        Ok(())
    }

    #[test]
    fn count_format_reports_total_and_files() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;

        let out = search("Beta", &root_of(&temp_dir), "count", "", true);
        let lines: Vec<&str> = out.lines().collect();

        // sample1.py: 3, sample2.js: 2 (utilBeta, beta helper)
        assert_eq!(lines[0], "TOTAL:5");
        assert!(lines[1].starts_with("3:") && lines[1].ends_with("sample1.py"));
        assert!(lines[2].starts_with("2:") && lines[2].ends_with("sample2.js"));
        Ok(())
    }

    #[test]
    fn context_format_marks_the_matched_line() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;

        let out = search("class Alpha", &root_of(&temp_dir), "context", "", false);

        assert!(out.starts_with("FILE: "));
        assert!(out.contains("\n---\n"));
        assert!(out.contains("=>    2: class Alpha:"));
        assert!(out.contains("      1: "));
        assert!(out.contains("      7:         print('running Beta')"));
        assert!(!out.contains("      8:"));
        Ok(())
    }

    #[test]
    fn full_format_returns_file_body() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;

        let out = search("Alpha", &root_of(&temp_dir), "full", "", false);

        assert!(out.contains("class Alpha"));
        assert!(out.contains("# TODO: Beta improvement"));
        assert!(out.starts_with(&format!("FILE: {}", path_str(&temp_dir.path().join("sample1.py")))));
        Ok(())
    }

    #[test]
    fn unknown_format_falls_back_to_count() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;

        let out = search("Alpha", &root_of(&temp_dir), "summary", "", false);
        assert!(out.starts_with("TOTAL:1\n"));
        Ok(())
    }

    #[test]
    fn no_matches_literals() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;
        let root = root_of(&temp_dir);

        assert_eq!(search("Gamma", &root, "count", "", false), "0");
        assert_eq!(search("Gamma", &root, "lines", "", false), "No matches found");
        assert_eq!(search("Gamma", &root, "context", "", false), "No matches found");
        assert_eq!(search("Gamma", &root, "full", "", false), "No matches found");

        let empty = TempDir::new()?;
        assert_eq!(search("Gamma", &root_of(&empty), "count", "", false), "0");
        assert_eq!(search("Gamma", &root_of(&empty), "lines", "", false), "No matches found");
        Ok(())
    }

    #[test]
    fn single_file_root() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;
        let file = path_str(&temp_dir.path().join("sample2.js"));

        let out = search("beta", &file, "lines", "*.py", false);
        assert_eq!(out, format!("{}:3:// beta helper", file));
        Ok(())
    }

    #[test]
    fn carriage_return_line_endings() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "one\rneedle\rthree\r")?;
        let root = root_of(&temp_dir);

        let lines = search("needle", &root, "lines", "", false);
        assert_eq!(lines, format!("{}:2:needle", path_str(&file)));

        let context = search("needle", &root, "context", "", false);
        assert!(context.contains("=>    2: needle"));
        assert!(context.contains("      3: three"));
        Ok(())
    }
}

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn invalid_regex_is_reported() -> anyhow::Result<()> {
        let temp_dir = create_sample_project()?;

        let out = search("[unclosed", &root_of(&temp_dir), "lines", "", false);
        assert!(out.starts_with("Error: invalid regex:"));
        Ok(())
    }

    #[test]
    fn missing_pattern_and_path() {
        assert_eq!(search("", ".", "count", "", false), "Error: 'pattern' is required");
        assert_eq!(
            search("x", "does/not/exist", "count", "", false),
            "Error: path 'does/not/exist' does not exist"
        );
    }
}

#[cfg(test)]
mod filtering {
    use super::*;

    fn create_layered_project() -> anyhow::Result<TempDir> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src/service"))?;
        fs::create_dir_all(root.join("tests"))?;
        fs::create_dir_all(root.join("node_modules/lib"))?;
        fs::create_dir_all(root.join("__pycache__"))?;
        fs::create_dir_all(root.join("generated"))?;

        fs::write(root.join("src/service/api.ts"), "export const TOKEN = 1;\n")?;
        fs::write(root.join("src/main.py"), "TOKEN = 2\n")?;
        fs::write(root.join("tests/test_main.py"), "assert TOKEN\n")?;
        fs::write(root.join("README.md"), "Set TOKEN first.\n")?;
        fs::write(root.join("node_modules/lib/index.js"), "var TOKEN;\n")?;
        fs::write(root.join("__pycache__/main.pyc"), "TOKEN\n")?;
        fs::write(root.join("generated/schema.py"), "TOKEN = 3\n")?;
        fs::write(root.join("secret.env"), "TOKEN=abc\n")?;
        fs::write(root.join(".gitignore"), "generated/\n*.env\n")?;

        Ok(temp_dir)
    }

    #[test]
    fn skip_dirs_and_gitignore_are_excluded() -> anyhow::Result<()> {
        let temp_dir = create_layered_project()?;

        let out = search("TOKEN", &root_of(&temp_dir), "lines", "", false);

        assert!(out.contains("api.ts:1:"));
        assert!(out.contains("main.py:1:"));
        assert!(out.contains("test_main.py:1:"));
        assert!(out.contains("README.md:1:"));
        assert!(!out.contains("node_modules"));
        assert!(!out.contains("__pycache__"));
        assert!(!out.contains("generated"));
        assert!(!out.contains("secret.env"));
        Ok(())
    }

    #[test]
    fn globs_only_narrow_the_candidates() -> anyhow::Result<()> {
        let temp_dir = create_layered_project()?;
        let root = root_of(&temp_dir);

        let unfiltered = search("TOKEN", &root, "lines", "", false);
        for globs in ["*.py", "src/**/*.ts", "*.md,tests/*.py", "*.nothing"] {
            let filtered = search("TOKEN", &root, "lines", globs, false);
            for line in filtered.lines().filter(|l| *l != "No matches found") {
                assert!(unfiltered.contains(line), "{} added {}", globs, line);
            }
        }

        let py_only = search("TOKEN", &root, "count", "*.py", false);
        assert!(py_only.starts_with("TOTAL:2\n"));

        let service = search("TOKEN", &root, "lines", "**/service/*.ts", false);
        assert_eq!(service.lines().count(), 1);
        assert!(service.contains("api.ts"));
        Ok(())
    }

    #[test]
    fn recursive_wildcard_inside_component() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("src/a"))?;
        fs::write(temp_dir.path().join("src/a/m.py"), "needle\n")?;
        fs::write(temp_dir.path().join("top.py"), "needle\n")?;
        fs::write(temp_dir.path().join("notes.txt"), "needle\n")?;
        let root = root_of(&temp_dir);

        assert!(search("needle", &root, "count", "**.py", false).starts_with("TOTAL:2\n"));
        assert!(search("needle", &root, "count", "**/*.py", false).starts_with("TOTAL:2\n"));

        let nested = search("needle", &root, "lines", "src/**.py", false);
        assert_eq!(nested.lines().count(), 1);
        assert!(nested.ends_with("m.py:1:needle"));
        Ok(())
    }

    #[test]
    fn binary_files_are_skipped_and_counted() -> anyhow::Result<()> {
        let temp_dir = create_layered_project()?;
        fs::write(temp_dir.path().join("blob.bin"), b"TOKEN\x00\x01\x02")?;
        fs::write(temp_dir.path().join("image.png"), b"\x89PNG\x00TOKEN")?;

        let out = search("TOKEN", &root_of(&temp_dir), "lines", "", false);
        assert!(!out.contains("blob.bin"));
        assert!(!out.contains("image.png"));
        assert!(out.ends_with("\n[skipped 2 binary files]"));

        let none = search("NOPE", &root_of(&temp_dir), "count", "", false);
        assert_eq!(none, "0 [skipped 2 binary files]");
        Ok(())
    }

    #[test]
    fn repeated_searches_are_identical() -> anyhow::Result<()> {
        let temp_dir = create_layered_project()?;
        let root = root_of(&temp_dir);

        for format in ["count", "lines", "context", "full"] {
            let first = search("TOKEN", &root, format, "", false);
            let second = search("TOKEN", &root, format, "", false);
            assert_eq!(first, second);
        }
        Ok(())
    }
}

#[cfg(test)]
mod limits {
    use super::*;

    #[test]
    fn file_scan_truncation_without_matches() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        for i in 0..5001 {
            fs::write(temp_dir.path().join(format!("file_{:04}.txt", i)), "nothing to see\n")?;
        }

        let out = search("needle", &root_of(&temp_dir), "lines", "", false);
        assert!(out.starts_with("No matches found"));
        assert!(out.contains("[truncated file scan at 5000]"));
        Ok(())
    }

    #[test]
    fn lines_cap_at_200() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let content: String = (0..250).map(|i| format!("hit {}\n", i)).collect();
        fs::write(temp_dir.path().join("many.txt"), content)?;

        let out = search("hit", &root_of(&temp_dir), "lines", "", false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 201);
        assert_eq!(lines[200], "[truncated at 200 matches]");
        assert!(lines[199].ends_with(":200:hit 199"));
        Ok(())
    }

    #[test]
    fn count_total_includes_files_beyond_display_cap() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        for i in 0..60 {
            fs::write(temp_dir.path().join(format!("f{:02}.txt", i)), "hit\nhit\n")?;
        }

        let out = search("hit", &root_of(&temp_dir), "count", "", false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "TOTAL:120");
        assert_eq!(lines.len(), 1 + 50 + 1);
        assert_eq!(lines[51], "[truncated file list at 50]");
        Ok(())
    }

    #[test]
    fn context_blocks_cap_at_50() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let content: String = (0..80).map(|i| format!("hit {}\n", i)).collect();
        fs::write(temp_dir.path().join("many.txt"), content)?;

        let out = search("hit", &root_of(&temp_dir), "context", "", false);
        assert_eq!(out.matches("FILE: ").count(), 50);
        assert!(out.ends_with("[truncated at 50 blocks]"));
        Ok(())
    }

    #[test]
    fn full_format_caps() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        for i in 0..12 {
            let body = format!("needle\n{}", "x".repeat(15_000));
            fs::write(temp_dir.path().join(format!("f{:02}.txt", i)), body)?;
        }

        let out = search("needle", &root_of(&temp_dir), "full", "", false);
        assert!(out.matches("FILE: ").count() <= 10);
        assert!(out.contains("[truncated aggregate content at 120000 chars]"));
        assert!(!out.contains("[truncated file list"));
        let body_chars: usize = out
            .lines()
            .filter(|line| !line.is_empty() && line.chars().all(|c| c == 'x'))
            .map(|line| line.len())
            .sum();
        assert!(body_chars <= 120_000);
        Ok(())
    }

    #[test]
    fn full_format_file_list_cap() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        for i in 0..12 {
            fs::write(temp_dir.path().join(format!("f{:02}.txt", i)), "needle\n")?;
        }

        let out = search("needle", &root_of(&temp_dir), "full", "", false);
        assert_eq!(out.matches("FILE: ").count(), 10);
        assert!(out.ends_with("\n\n[truncated file list at 10]"));

        let narrowed = search("needle", &root_of(&temp_dir), "full", "f0*", false);
        assert_eq!(narrowed.matches("FILE: ").count(), 10);
        assert!(!narrowed.contains("[truncated"));
        Ok(())
    }

    #[test]
    fn configured_limits_are_reported() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        for i in 0..5 {
            fs::write(temp_dir.path().join(format!("f{}.txt", i)), "hit\n")?;
        }
        let limits = SearchLimits {
            max_files_scanned: 3,
            ..SearchLimits::default()
        };

        let out = search_with_limits("hit", &root_of(&temp_dir), "count", "", false, &limits);
        assert_eq!(out.lines().next(), Some("TOTAL:3"));
        assert!(out.ends_with("\n[truncated file scan at 3]"));
        Ok(())
    }
}
