//! Small helpers shared by the binary and the printers.

use owo_colors::OwoColorize;
use std::path::Path;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Render `path` relative to the working directory when possible.
pub fn rel_to_wd(path: &Path) -> String {
    if path.is_relative() {
        return path.to_string_lossy().to_string();
    }
    std::env::current_dir()
        .ok()
        .and_then(|wd| pathdiff::diff_paths(path, wd))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_to_wd_leaves_relative_paths() {
        assert_eq!(rel_to_wd(Path::new("pkg/a.py")), "pkg/a.py");
    }

    #[test]
    fn test_rel_to_wd_strips_working_directory() {
        let wd = std::env::current_dir().unwrap();
        let abs = wd.join("pkg").join("a.py");
        assert_eq!(
            rel_to_wd(&abs),
            Path::new("pkg").join("a.py").to_string_lossy()
        );
    }
}
