#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Give the fuzzer a head start past the magic check.
    let mut input = b"PP20".to_vec();
    input.extend_from_slice(data);

    // Unpacking may fail on invalid input - that's OK.
    // We're looking for panics/crashes, not errors.
    let _ = pp20::unpack(&input);
    let _ = pp20::unpack(data);
});
