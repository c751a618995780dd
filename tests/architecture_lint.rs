//! Architecture enforcement lint.
//!
//! - The navigation model (`src/nav/`, `src/auth.rs`) stays free of the UI
//!   framework so path rules, hover state and the action panel can be tested
//!   and reused without a renderer.
//! - Browser APIs are touched only by the client fetch helpers and the session
//!   store. Components receive everything else through props or context.
//! - Crates listed only under `[dev-dependencies]` are never used from `src/`.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files allowed to reach into the browser directly
const BROWSER_API_FILES: &[&str] = &["app/api.rs", "app/auth_context.rs"];

const BROWSER_API_PATTERNS: &[&str] = &["web_sys::", "js_sys::", "wasm_bindgen::"];

/// Crates available to tests only
const DEV_ONLY_PATTERNS: &[&str] = &["tower::", "http_body_util::", "serial_test", "tempfile::"];

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

fn relative(path: &Path) -> String {
    path.strip_prefix(src_dir())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// (location, offending line) for every non-comment line containing `pattern`
fn find_uses(path: &Path, pattern: &str) -> Vec<(String, String)> {
    let Ok(content) = fs::read_to_string(path) else {
        return vec![];
    };

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("//") && trimmed.contains(pattern)
        })
        .map(|(i, line)| {
            (
                format!("{}:{}", relative(path), i + 1),
                line.trim().to_string(),
            )
        })
        .collect()
}

#[test]
fn navigation_model_is_framework_free() {
    let mut files = rust_files(&src_dir().join("nav"));
    files.push(src_dir().join("auth.rs"));

    let violations: Vec<_> = files
        .iter()
        .flat_map(|path| find_uses(path, "dioxus"))
        .collect();

    if !violations.is_empty() {
        let mut msg = String::from(
            "\n\nARCHITECTURE VIOLATION: navigation model must not depend on dioxus\n\n",
        );
        for (location, line) in &violations {
            msg.push_str(&format!("  {}\n    {}\n", location, line));
        }
        msg.push_str("\nMove rendering concerns into src/app/.\n");
        panic!("{}", msg);
    }
}

#[test]
fn browser_apis_stay_in_allowed_files() {
    let mut violations = Vec::new();

    for path in rust_files(&src_dir()) {
        let rel = relative(&path);
        if BROWSER_API_FILES.iter().any(|allowed| rel == *allowed) {
            continue;
        }
        for pattern in BROWSER_API_PATTERNS {
            violations.extend(find_uses(&path, pattern));
        }
    }

    if !violations.is_empty() {
        let mut msg = String::from(
            "\n\nARCHITECTURE VIOLATION: browser APIs used outside the allowed files\n\n",
        );
        for (location, line) in &violations {
            msg.push_str(&format!("  {}\n    {}\n", location, line));
        }
        msg.push_str(&format!(
            "\nAllowed files: {:?}. Inject the capability through context instead.\n",
            BROWSER_API_FILES
        ));
        panic!("{}", msg);
    }
}

#[test]
fn dev_only_crates_stay_out_of_library_code() {
    let mut violations = Vec::new();

    for path in rust_files(&src_dir()) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        // Inline test modules may use them.
        let library_part = content.split("#[cfg(test)]").next().unwrap_or("");
        for (i, line) in library_part.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") {
                continue;
            }
            if DEV_ONLY_PATTERNS.iter().any(|p| trimmed.contains(p)) {
                violations.push((
                    format!("{}:{}", relative(&path), i + 1),
                    trimmed.to_string(),
                ));
            }
        }
    }

    if !violations.is_empty() {
        let mut msg = String::from(
            "\n\nARCHITECTURE VIOLATION: dev-only crate used in library code\n\n",
        );
        for (location, line) in &violations {
            msg.push_str(&format!("  {}\n    {}\n", location, line));
        }
        msg.push_str("\nMove the crate to [dependencies] or keep it in tests.\n");
        panic!("{}", msg);
    }
}
