//! Commit hash and build date baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line build description for banners and reports.
pub fn build_label() -> String {
    format!("{} ({})", BUILD_COMMIT, BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_label() {
        let label = build_label();
        assert!(label.starts_with(BUILD_COMMIT));
        assert!(label.contains(BUILD_DATE));
    }
}
