/// Engine game logs with known-good roundtrip behavior, in suite order.
///
/// Order is load-bearing: generated tests appear in this order, and the
/// suite is appended to over time rather than resorted.
pub(crate) const UCI_LOG_FIXTURES: &[&str] = &[
    "tests/uci_logs/berserk_w_game_1.txt",
    "tests/uci_logs/berserk_b_game_1.txt",
    "tests/uci_logs/sf_w_game_1.txt",
    "tests/uci_logs/sf_b_game_1.txt",
    "tests/uci_logs/sf_w_game_2.txt",
    "tests/uci_logs/sf_b_game_2.txt",
    "tests/uci_logs/sf_w_game_3.txt",
    "tests/uci_logs/sf_b_game_3.txt",
];
