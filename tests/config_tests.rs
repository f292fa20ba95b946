//! Config parsing tests: the shared line rule and whole-file parsing.

use fwbuild::{parse_file, parse_line, parse_str, ConfigEntry, ConfigError};

#[test]
fn parse_line_splits_on_first_equals_and_trims() {
    assert_eq!(parse_line("CONFIG_FOO=y"), Some(("CONFIG_FOO", "y")));
    assert_eq!(parse_line("  CONFIG_FOO  =  y  "), Some(("CONFIG_FOO", "y")));
    assert_eq!(
        parse_line("CONFIG_CMDLINE=\"console=ttyS0\""),
        Some(("CONFIG_CMDLINE", "\"console=ttyS0\""))
    );
    assert_eq!(parse_line("CONFIG_BAR="), Some(("CONFIG_BAR", "")));
}

#[test]
fn parse_line_skips_comments_blank_and_malformed() {
    assert_eq!(parse_line("# CONFIG_FOO is not set"), None);
    assert_eq!(parse_line("   # indented comment=1"), None);
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \t  "), None);
    assert_eq!(parse_line("no equals sign here"), None);
    assert_eq!(parse_line("=y"), None);
}

#[test]
fn parse_str_keeps_order_and_duplicates() {
    let text = "\
# Kernel config
CONFIG_SMP=y

CONFIG_PAGE_SIZE=4096
garbage line
CONFIG_SMP=n
CONFIG_MM_DEBUG=
";
    let entries = parse_str(text);
    assert_eq!(
        entries,
        vec![
            ConfigEntry::new("CONFIG_SMP", "y"),
            ConfigEntry::new("CONFIG_PAGE_SIZE", "4096"),
            ConfigEntry::new("CONFIG_SMP", "n"),
            ConfigEntry::new("CONFIG_MM_DEBUG", ""),
        ]
    );
    assert!(entries[3].is_unset());
    assert!(!entries[0].is_unset());
}

#[test]
fn parse_str_handles_crlf() {
    let entries = parse_str("CONFIG_A=y\r\nCONFIG_B=m\r\n");
    assert_eq!(
        entries,
        vec![ConfigEntry::new("CONFIG_A", "y"), ConfigEntry::new("CONFIG_B", "m")]
    );
}

#[test]
fn parse_str_handles_bare_cr() {
    let entries = parse_str("CONFIG_A=y\rCONFIG_B=m\r# comment\rCONFIG_C=\r");
    assert_eq!(
        entries,
        vec![
            ConfigEntry::new("CONFIG_A", "y"),
            ConfigEntry::new("CONFIG_B", "m"),
            ConfigEntry::new("CONFIG_C", ""),
        ]
    );
}

#[test]
fn parse_file_missing_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.config");
    match parse_file(&path) {
        Err(ConfigError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {:?}", other),
    }
}
