//! Minimal example: pack two images into one stream, then read it back and print each record.
//!
//! Run: cargo run --example pack_and_list

use std::io::Cursor;

use fwbuild::{pack_record, ImageParams, ImageType, ImageVersion, RecordReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let images: Vec<(ImageType, Vec<u8>)> = vec![
        (ImageType::Bootloader, b"bootloader image".to_vec()),
        (ImageType::KernelA, b"kernel image".to_vec()),
    ];

    let mut stream = Cursor::new(Vec::new());
    for (image_type, payload) in &images {
        let params = ImageParams::new(*image_type, ImageVersion::new(1, 0, 0));
        pack_record(&mut stream, payload, &params)?;
    }
    stream.set_position(0);

    for record in RecordReader::new(stream) {
        let record = record?;
        println!(
            "@{}: {} v{} ({} bytes)",
            record.offset, record.header.image_type, record.header.version, record.header.size
        );
    }
    Ok(())
}
