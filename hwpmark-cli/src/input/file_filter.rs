//! File-type filtering before conversion

use std::path::{Path, PathBuf};

/// File extension of HWP documents
pub const HWP_EXTENSION: &str = "hwp";

/// Check whether a path carries the `.hwp` extension (case-insensitive)
pub fn is_hwp_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(HWP_EXTENSION))
}

/// Split paths into accepted and rejected lists, preserving order
pub fn partition_by_extension(paths: Vec<PathBuf>, any_extension: bool) -> (Vec<PathBuf>, Vec<PathBuf>) {
    if any_extension {
        return (paths, Vec::new());
    }
    paths.into_iter().partition(|path| is_hwp_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hwp_path() {
        assert!(is_hwp_path(Path::new("report.hwp")));
        assert!(is_hwp_path(Path::new("dir/REPORT.HWP")));
        assert!(!is_hwp_path(Path::new("report.hwpx")));
        assert!(!is_hwp_path(Path::new("report.txt")));
        assert!(!is_hwp_path(Path::new("hwp")));
    }

    #[test]
    fn test_partition() {
        let paths = vec![
            PathBuf::from("a.hwp"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.Hwp"),
        ];

        let (accepted, rejected) = partition_by_extension(paths.clone(), false);
        assert_eq!(accepted, vec![PathBuf::from("a.hwp"), PathBuf::from("c.Hwp")]);
        assert_eq!(rejected, vec![PathBuf::from("b.txt")]);

        let (accepted, rejected) = partition_by_extension(paths, true);
        assert_eq!(accepted.len(), 3);
        assert!(rejected.is_empty());
    }
}
