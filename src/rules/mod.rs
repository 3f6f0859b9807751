//! The two fixed naming-convention classifiers
//!
//! Both classifiers look only at a candidate's final path segment (the
//! directory's own name, never its full path). They are independent: a single
//! directory may be returned by both, and neither short-circuits the other.
//!
//! Uppercase detection is ASCII-only (A-Z) by per-character check; non-ASCII
//! cased letters pass.

use std::path::{Path, PathBuf};

/// Whether a directory name contains at least one ASCII uppercase letter
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
}

/// Whether a directory name contains at least one literal space (U+0020)
pub fn has_space(name: &str) -> bool {
    name.contains(' ')
}

fn directory_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Every candidate whose name breaks the all-lowercase rule
pub fn classify_case(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates.iter().filter(|c| has_uppercase(&directory_name(c))).cloned().collect()
}

/// Every candidate whose name breaks the no-space rule
pub fn classify_space(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates.iter().filter(|c| has_space(&directory_name(c))).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from("/repo").join(n)).collect()
    }

    #[test]
    fn test_lowercase_digit_punctuation_names_pass_both() {
        let candidates = paths(&["abc", "dir_1", "v2.0", "2024", "with-dash", "dot.dir"]);

        assert!(classify_case(&candidates).is_empty());
        assert!(classify_space(&candidates).is_empty());
    }

    #[test]
    fn test_any_uppercase_letter_fails_case_rule() {
        let candidates = paths(&["Upper", "camelCase", "ALLCAPS", "endS"]);

        assert_eq!(classify_case(&candidates).len(), 4);
        assert!(classify_space(&candidates).is_empty());
    }

    #[test]
    fn test_any_space_fails_space_rule() {
        let candidates = paths(&[" leading", "trailing ", "in between"]);

        assert_eq!(classify_space(&candidates).len(), 3);
        assert!(classify_case(&candidates).is_empty());
    }

    #[test]
    fn test_checks_are_independent() {
        let candidates = paths(&["Case and Space"]);

        // Flagged by both classifiers, not one or the other.
        assert_eq!(classify_case(&candidates).len(), 1);
        assert_eq!(classify_space(&candidates).len(), 1);
    }

    #[test]
    fn test_only_final_segment_is_classified() {
        // The parent carries an uppercase letter but the candidate's own name
        // is clean, so the candidate passes.
        let candidates = vec![PathBuf::from("/repo/Upper/clean")];

        assert!(classify_case(&candidates).is_empty());
        assert!(classify_space(&candidates).is_empty());
    }

    #[test]
    fn test_uppercase_detection_is_ascii_only() {
        assert!(has_uppercase("aBc"));
        assert!(!has_uppercase("über"));
        assert!(!has_uppercase("Übung"));
        assert!(!has_uppercase("straße"));
    }

    #[test]
    fn test_space_detection_is_literal_u0020() {
        assert!(has_space("a b"));
        assert!(!has_space("tab\tname"));
        assert!(!has_space("nbsp\u{00a0}name"));
    }
}
