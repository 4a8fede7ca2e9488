/// Directory prefix removed from fixture paths when deriving test names
pub(crate) const DEFAULT_STRIP_PREFIX: &str = "tests/uci_logs/";

/// File extension removed from fixture paths when deriving test names
pub(crate) const DEFAULT_STRIP_SUFFIX: &str = ".txt";

/// Helper function each generated test calls
pub(crate) const DEFAULT_HELPER: &str = "roundtrip_logs";

/// Prefix for generated test function names
pub(crate) const TEST_NAME_PREFIX: &str = "roundtrip_";
