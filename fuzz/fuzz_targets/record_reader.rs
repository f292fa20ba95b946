#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for record in fwbuild::RecordReader::new(Cursor::new(data)) {
        if record.is_err() {
            break;
        }
    }
});
