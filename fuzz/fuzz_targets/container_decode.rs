#![no_main]

// Decoding arbitrary bytes must never panic. A Mixed run may store uniform
// alpha, which the first re-encode canonicalises; from then on every
// encode/decode round must reproduce the texture exactly.

use dxt_rle_codec::{decode, encode, DecodedTexture};
use libfuzzer_sys::fuzz_target;

fn round_trip(texture: &DecodedTexture) -> DecodedTexture {
    let encoded = encode(&texture.descriptor(), &texture.data, texture.header.variant)
        .expect("re-encoding a decoded texture failed");
    decode(&encoded).expect("decoding a re-encoded texture failed")
}

fuzz_target!(|data: &[u8]| {
    let Ok(first) = decode(data) else {
        return;
    };

    let second = round_trip(&first);
    assert_eq!(first.data.len(), second.data.len(), "decoded sizes don't match");

    let third = round_trip(&second);
    assert_eq!(second.data, third.data, "canonical texture changed");
});
