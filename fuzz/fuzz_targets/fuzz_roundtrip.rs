#![no_main]
use libfuzzer_sys::fuzz_target;
use zengray::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the headers and pixel
    // array byte for byte
    let Ok(decoded) = decode_bmp(data, enough::Unstoppable) else {
        return;
    };
    let Ok(reencoded) = encode_bmp(&decoded, enough::Unstoppable) else {
        panic!("decoded bitmap failed to encode");
    };

    let offset = decoded.headers.file.pixel_data_offset as usize;
    let pixel_len = decoded.grid.as_bytes().len();
    assert_eq!(&reencoded[..54], &data[..54], "header mismatch");
    assert_eq!(
        &reencoded[offset..offset + pixel_len],
        &data[offset..offset + pixel_len],
        "pixel array mismatch"
    );

    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded.grid, decoded2.grid, "roundtrip pixel mismatch");
});
