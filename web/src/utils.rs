/// Seed for a new layout, drawn from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        *byte = (256. * random()) as u8;
    }
    u64::from_be_bytes(bytes)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn seeds_are_not_constant() {
        assert_ne!(js_random_seed(), js_random_seed());
    }
}
