#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode, grayscale and ASCII paths must never panic
    if let Ok(mut bitmap) = zengray::decode_bmp(data, enough::Unstoppable) {
        let _ = zengray::render_ascii(&bitmap.grid);
        zengray::apply_grayscale(&mut bitmap.grid);
    }
    let _ = zengray::convert_bytes(data, enough::Unstoppable);
});
