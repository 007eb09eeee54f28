//! Tests that the unit test tree mirrors src and is fully compiled

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Tests every src file has a unit test file at the same relative path
    // Verified by adding a src file without a test counterpart
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = relative_paths("src");
        let test_paths = relative_paths("tests/unit");

        let mut missing_tests: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_entry_point(path) && !test_paths.contains(*path))
            .collect();
        missing_tests.sort();

        assert!(
            missing_tests.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing_tests
                .iter()
                .map(|src_path| format!("  - src/{src_path} -> tests/unit/{src_path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests no unit test file outlives the src file it covers
    // Verified by renaming a src file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_paths("src");
        let test_paths = relative_paths("tests/unit");

        let mut orphaned_tests: Vec<&String> = test_paths
            .iter()
            .filter(|path| !is_entry_point(path) && !src_paths.contains(*path))
            .collect();
        orphaned_tests.sort();

        assert!(
            orphaned_tests.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned_tests
                .iter()
                .map(|test_path| format!("  - tests/unit/{test_path} -> src/{test_path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests every unit test file is declared by its parent module
    // Verified by removing a mod line from tests/unit/game/mod.rs
    #[test]
    fn test_all_unit_tests_are_compiled() {
        let tests_dir = Path::new("tests/unit");
        let mut undeclared = Vec::new();

        for relative in relative_paths("tests/unit") {
            let path = tests_dir.join(&relative);
            if is_entry_point(&relative) || path.is_dir() {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let parent = path.parent().unwrap_or(tests_dir);
            let declaring = if parent == tests_dir {
                parent.join("main.rs")
            } else {
                parent.join("mod.rs")
            };

            let declared = fs::read_to_string(&declaring)
                .map(|content| content.lines().any(|line| line.trim() == format!("mod {stem};")))
                .unwrap_or(false);
            if !declared {
                undeclared.push(format!("  - {} (in {})", path.display(), declaring.display()));
            }
        }

        undeclared.sort();
        assert!(
            undeclared.is_empty(),
            "The following unit test files are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every test file holds at least one test
    // Verified by adding an empty test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        let result = check_test_files(tests_dir, &mut files_without_tests);
        if let Err(error) = result {
            assert!(
                tests_dir.exists(),
                "Failed to scan tests directory: {error}"
            );
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    // Crate roots and module files only organize other files
    fn is_entry_point(relative: &str) -> bool {
        let name = Path::new(relative)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        matches!(name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn relative_paths(dir: &str) -> HashSet<String> {
        let dir = Path::new(dir);
        collect_relative_paths(dir, dir).unwrap_or_else(|error| {
            assert!(!dir.exists(), "Failed to read {}: {error}", dir.display());
            HashSet::new()
        })
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();

                let relative_path = path
                    .strip_prefix(base)
                    .map_err(|e| io::Error::other(e.to_string()))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative_path);
                    paths.extend(collect_relative_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative_path);
                }
            }
        }

        Ok(paths)
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };

                if file_name == "main.rs" || file_name == "mod.rs" {
                    continue;
                }

                if !fs::read_to_string(&path)?.contains("#[test]") {
                    files_without_tests.push(format!("  - {}", path.display()));
                }
            }
        }

        Ok(())
    }
}
