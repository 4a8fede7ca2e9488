//! Test stub planning
//!
//! Derives a test name from each fixture path and pairs it with the
//! original path for rendering.

use crate::consts::TEST_NAME_PREFIX;

/// Pieces removed from a fixture path when deriving its test name.
#[derive(Debug, Clone)]
pub(crate) struct GenerateOptions {
    pub(crate) strip_prefix: String,
    pub(crate) strip_suffix: String,
}

/// One planned test: function name plus the fixture path it exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestStub {
    pub(crate) name: String,
    pub(crate) path: String,
}

/// Strip the configured prefix and suffix from a fixture path.
///
/// A missing prefix or suffix passes through unchanged; the caller gets
/// whatever identifier falls out.
pub(crate) fn test_ident<'a>(path: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let stripped = path.strip_prefix(prefix).unwrap_or(path);
    stripped.strip_suffix(suffix).unwrap_or(stripped)
}

/// Plan one stub per path, preserving input order (and any duplicates).
pub(crate) fn plan_stubs(paths: &[String], options: &GenerateOptions) -> Vec<TestStub> {
    paths
        .iter()
        .map(|path| TestStub {
            name: format!(
                "{TEST_NAME_PREFIX}{}",
                test_ident(path, &options.strip_prefix, &options.strip_suffix)
            ),
            path: path.clone(),
        })
        .collect()
}

/// Check that a helper name is usable as a Rust identifier in generated code.
pub(crate) fn is_identifier(s: &str) -> bool {
    if s == "_" {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GenerateOptions {
        GenerateOptions {
            strip_prefix: "tests/uci_logs/".to_string(),
            strip_suffix: ".txt".to_string(),
        }
    }

    #[test]
    fn ident_strips_prefix_and_suffix() {
        assert_eq!(
            test_ident("tests/uci_logs/sf_w_game_3.txt", "tests/uci_logs/", ".txt"),
            "sf_w_game_3"
        );
    }

    #[test]
    fn ident_missing_prefix_is_left_alone() {
        assert_eq!(
            test_ident("fixtures/sf_w_game_3.txt", "tests/uci_logs/", ".txt"),
            "fixtures/sf_w_game_3"
        );
    }

    #[test]
    fn ident_missing_suffix_is_left_alone() {
        assert_eq!(
            test_ident("tests/uci_logs/sf_w_game_3.log", "tests/uci_logs/", ".txt"),
            "sf_w_game_3.log"
        );
    }

    #[test]
    fn ident_missing_both_passes_through() {
        assert_eq!(test_ident("game.log", "tests/uci_logs/", ".txt"), "game.log");
    }

    #[test]
    fn ident_only_strips_anchored_occurrences() {
        // An interior occurrence of the prefix is not an anchored match.
        assert_eq!(
            test_ident("old/tests/uci_logs/a.txt", "tests/uci_logs/", ".txt"),
            "old/tests/uci_logs/a"
        );
    }

    #[test]
    fn plan_preserves_order() {
        let paths = vec![
            "tests/uci_logs/b_game.txt".to_string(),
            "tests/uci_logs/a_game.txt".to_string(),
        ];
        let stubs = plan_stubs(&paths, &options());
        assert_eq!(stubs[0].name, "roundtrip_b_game");
        assert_eq!(stubs[1].name, "roundtrip_a_game");
    }

    #[test]
    fn plan_keeps_duplicates() {
        let paths = vec![
            "tests/uci_logs/a_game.txt".to_string(),
            "tests/uci_logs/a_game.txt".to_string(),
        ];
        let stubs = plan_stubs(&paths, &options());
        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0], stubs[1]);
    }

    #[test]
    fn plan_pairs_name_with_original_path() {
        let paths = vec!["tests/uci_logs/berserk_w_game_1.txt".to_string()];
        let stubs = plan_stubs(&paths, &options());
        assert_eq!(stubs[0].name, "roundtrip_berserk_w_game_1");
        assert_eq!(stubs[0].path, "tests/uci_logs/berserk_w_game_1.txt");
    }

    #[test]
    fn identifier_accepts_snake_case() {
        assert!(is_identifier("roundtrip_logs"));
        assert!(is_identifier("_helper2"));
    }

    #[test]
    fn identifier_rejects_bad_input() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("_"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("round trip"));
        assert!(!is_identifier("helper()"));
    }
}
