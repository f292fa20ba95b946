#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let entries = fwbuild::parse_str(text);
        let _ = fwbuild::render_header(&entries);
    }
});
