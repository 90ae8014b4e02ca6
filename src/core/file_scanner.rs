use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Patterns that are never worth scanning, regardless of configuration.
const ALWAYS_IGNORE_PATTERNS: &[&str] = &["**/node_modules/**", "**/.git/**"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ALWAYS_IGNORE_PATTERNS {
        if let Ok(pattern) = Pattern::new(p) {
            glob_patterns.push(pattern);
        }
    }

    // Process user-defined ignore patterns
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: convert to absolute path for prefix matching
            let path = Path::new(base_dir).join(p);
            literal_ignore_paths.push(path);
        }
    }

    // Add test file patterns (these are always glob patterns)
    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                // Glob mode: expand pattern to matching directories
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                // Literal path mode: use as-is
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            // Check if path matches any literal ignore path (prefix match)
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            // Check if path matches any glob pattern
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js" | "mjs" | "cjs" | "mts" | "cts")
    )
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_scan_source_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("app.tsx")).unwrap();
        File::create(dir_path.join("utils.ts")).unwrap();
        File::create(dir_path.join("index.mjs")).unwrap();
        File::create(dir_path.join("style.css")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false, false);

        assert_eq!(result.files.len(), 3);
        assert!(!result.files.iter().any(|f| f.ends_with("style.css")));
    }

    #[test]
    fn test_scan_always_ignores_node_modules() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let node_modules = dir_path.join("node_modules");
        fs::create_dir(&node_modules).unwrap();
        File::create(node_modules.join("lib.ts")).unwrap();
        File::create(dir_path.join("app.tsx")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false, false);

        assert_eq!(result.files.len(), 1);
        assert!(!result.files.iter().any(|f| f.contains("node_modules")));
    }

    #[test]
    fn test_scan_ignore_glob_pattern() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let generated = dir_path.join("generated");
        fs::create_dir(&generated).unwrap();
        File::create(generated.join("api.ts")).unwrap();
        File::create(dir_path.join("app.ts")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["**/generated/**".to_owned()],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.ts")));
    }

    #[test]
    fn test_scan_ignore_literal_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let vendored = dir_path.join("vendor");
        fs::create_dir(&vendored).unwrap();
        File::create(vendored.join("lib.js")).unwrap();
        File::create(dir_path.join("app.js")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["vendor".to_owned()],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_includes_restrict_scope() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let src = dir_path.join("src");
        fs::create_dir(&src).unwrap();
        File::create(src.join("app.ts")).unwrap();
        File::create(dir_path.join("root.ts")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["src".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.ts")));
    }

    #[test]
    fn test_scan_skips_test_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("app.ts")).unwrap();
        File::create(dir_path.join("app.test.ts")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], true, false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.ts")));
    }
}
