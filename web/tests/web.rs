//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn js_seeds_vary_between_calls() {
    let seeds: Vec<u64> = (0..8).map(|_| mnemo_web::js_random_seed()).collect();
    assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
}

#[wasm_bindgen_test]
fn forced_seed_is_stable() {
    assert_eq!(mnemo_web::seed_from_str("1234"), 1234);
    assert_eq!(
        mnemo_web::seed_from_str("memory"),
        mnemo_web::seed_from_str("memory")
    );
}
