//! Settings mode tests: metadata lines, version code, per-entry lines.

use std::fs;

use fwbuild::{parse_str, render_settings, BuildInfo, ConfigError, Version};

const STAMP: &str = "2024-01-02 03:04:05";

#[test]
fn version_code_packs_components() {
    assert_eq!(Version::new(0, 0, 0).code(), 0);
    assert_eq!(Version::new(1, 2, 3).code(), 0x010203);
    assert_eq!(Version::new(255, 255, 255).code(), 0xffffff);
}

#[test]
fn version_components_out_of_range() {
    assert_eq!(Version::from_components(1, 2, 3).unwrap(), Version::new(1, 2, 3));
    match Version::from_components(1, 256, 3) {
        Err(ConfigError::VersionOutOfRange { name, value }) => {
            assert_eq!(name, "patch");
            assert_eq!(value, 256);
        }
        other => panic!("expected range error, got {:?}", other),
    }
}

#[test]
fn render_settings_lines() {
    let info = BuildInfo::with_timestamp(Version::new(1, 0, 2), "arm", STAMP);
    let entries = parse_str("# header\nCONFIG_FOO=y\nCONFIG_BAR=\nCONFIG_SIZE = 4096\n");
    let text = render_settings(&info, &entries);
    assert_eq!(
        text,
        "CONFIG_VERSION_CODE = 65538\n\
         CONFIG_ARCH = \"arm\"\n\
         CONFIG_BUILD_INFO = \"2024-01-02 03:04:05\"\n\
         CONFIG_FOO = y\n\
         # CONFIG_BAR is not set\n\
         CONFIG_SIZE = 4096\n"
    );
}

#[test]
fn settings_do_not_normalize_values() {
    let info = BuildInfo::with_timestamp(Version::new(0, 0, 1), "arm", STAMP);
    let text = render_settings(&info, &parse_str("CONFIG_A=m\nCONFIG_B=n\n"));
    assert!(text.contains("CONFIG_A = m\n"));
    assert!(text.contains("CONFIG_B = n\n"));
}

#[test]
fn now_uses_timestamp_layout() {
    let info = BuildInfo::now(Version::new(1, 0, 0), "riscv");
    let stamp = &info.timestamp;
    assert_eq!(stamp.len(), 19, "{}", stamp);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[7..8], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[13..14], ":");
    assert_eq!(&stamp[16..17], ":");
}

#[test]
fn generate_writes_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(".config");
    let output = dir.path().join("config.mk");
    fs::write(&input, "CONFIG_FOO=y\nCONFIG_BAR=\n").unwrap();

    let info = BuildInfo::with_timestamp(Version::new(2, 1, 0), "arm", STAMP);
    fwbuild::settings::generate(&info, &input, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "CONFIG_VERSION_CODE = 131328");
    assert_eq!(lines[3], "CONFIG_FOO = y");
    assert_eq!(lines[4], "# CONFIG_BAR is not set");
    assert_eq!(lines.len(), 5);
}
