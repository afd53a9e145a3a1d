#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The 24-bit size field bounds what a container can describe.
    if data.len() > 0xFF_FFFF {
        return;
    }

    let packed = pp20::pack(data);
    let unpacked = pp20::unpack(&packed).expect("own output must decode");
    assert_eq!(unpacked, data);
});
