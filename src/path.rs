//! Platform-styled path assembly.
//!
//! Builds a display path from a directory, filename, and extension in either
//! Unix style (`/documents/file.txt`) or Windows drive style
//! (`C:\documents\file.txt`). The directory may contain nested segments;
//! whichever separator it arrived with is normalized to the chosen style.

/// Build a path string in Unix or Windows style.
///
/// A non-empty `drive` (such as `"C:"`) selects Windows style, with the
/// drive prefix and backslash separators. Otherwise the path is rooted at
/// `/` with forward slashes. An empty `extension` omits the dot entirely.
pub fn format_path(dir: &str, filename: &str, extension: &str, drive: Option<&str>) -> String {
    let file = if extension.is_empty() {
        filename.to_string()
    } else {
        format!("{}.{}", filename, extension)
    };

    match drive {
        Some(drive) if !drive.is_empty() => {
            format!("{}\\{}\\{}", drive, dir.replace('/', "\\"), file)
        }
        _ => format!("/{}/{}", dir.replace('\\', "/"), file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_unix_path() {
        assert_eq!(
            format_path("documents", "file", "txt", None),
            "/documents/file.txt"
        );
    }

    #[test]
    fn test_simple_windows_path() {
        assert_eq!(
            format_path("documents", "file", "txt", Some("C:")),
            "C:\\documents\\file.txt"
        );
    }

    #[test]
    fn test_any_windows_drive() {
        assert_eq!(
            format_path("documents", "file", "txt", Some("z:")),
            "z:\\documents\\file.txt"
        );
    }

    #[test]
    fn test_unix_sub_directories() {
        assert_eq!(
            format_path("seneca/web222", "file", "txt", None),
            "/seneca/web222/file.txt"
        );
    }

    #[test]
    fn test_windows_sub_directories() {
        assert_eq!(
            format_path("seneca\\web222", "file", "txt", Some("C:")),
            "C:\\seneca\\web222\\file.txt"
        );
    }

    #[test]
    fn test_separators_normalized_to_style() {
        // Unix-style dir under a drive, and vice versa
        assert_eq!(
            format_path("seneca/web222", "file", "txt", Some("C:")),
            "C:\\seneca\\web222\\file.txt"
        );
        assert_eq!(
            format_path("seneca\\web222", "file", "txt", None),
            "/seneca/web222/file.txt"
        );
    }

    #[test]
    fn test_longer_extension() {
        assert_eq!(format_path("www", "index", "html", None), "/www/index.html");
    }

    #[test]
    fn test_empty_extension_unix() {
        assert_eq!(format_path("files", "data", "", None), "/files/data");
    }

    #[test]
    fn test_empty_extension_windows() {
        assert_eq!(
            format_path("files", "data", "", Some("C:")),
            "C:\\files\\data"
        );
    }

    #[test]
    fn test_empty_drive_falls_back_to_unix() {
        assert_eq!(
            format_path("files", "data", "txt", Some("")),
            "/files/data.txt"
        );
    }
}
