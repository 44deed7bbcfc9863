#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, offset: u32, pixel: [u8; 3]) -> Vec<u8> {
    let stride = (24 * width + 31) / 32 * 4;
    let size = offset + stride * height;
    let mut b = vec![0u8; size as usize];
    b[0] = b'B'; b[1] = b'M';
    b[2..6].copy_from_slice(&size.to_le_bytes()); // file size
    b[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    b[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    b[18..22].copy_from_slice(&(width as i32).to_le_bytes());
    b[22..26].copy_from_slice(&(height as i32).to_le_bytes());
    b[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    b[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    let off = offset as usize;
    b[off..off + 3].copy_from_slice(&pixel); // BGR
    b
}

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 54, [0xff, 0, 0])).unwrap();
        fs::write(format!("{dir}/bmp_5x3.bmp"), bmp(5, 3, 54, [0, 0xff, 0])).unwrap();
        fs::write(format!("{dir}/bmp_gap.bmp"), bmp(2, 2, 70, [0, 0, 0xff])).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        let mut rle = bmp(1, 1, 54, [1, 2, 3]);
        rle[30] = 1;
        fs::write(format!("{dir}/bmp_rle8.bin"), rle).unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
