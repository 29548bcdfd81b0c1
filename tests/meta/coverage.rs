//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    fn relative_sources(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let files = rust_files(base)
            .unwrap_or_else(|error| panic!("cannot scan {dir}: {error}"));

        files
            .iter()
            .filter_map(|path| path.strip_prefix(base).ok())
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .filter(|relative| !is_exempt(relative))
            .collect()
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by adding a source file without tests
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_sources(SRC_DIR);
        let tests = relative_sources(UNIT_DIR);

        let missing: Vec<String> = sources
            .difference(&tests)
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by leaving a test file for a deleted module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_sources(SRC_DIR);
        let tests = relative_sources(UNIT_DIR);

        let orphaned: Vec<String> = tests
            .difference(&sources)
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file declares at least one test function
    // Verified by removing the attribute from one unit test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let files =
            rust_files(tests_dir).unwrap_or_else(|error| panic!("cannot scan tests: {error}"));

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                let relative = path.to_string_lossy().replace('\\', "/");
                !is_exempt(&relative)
            })
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
