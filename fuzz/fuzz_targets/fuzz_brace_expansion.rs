#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = std::str::from_utf8(data) {
        // Expansion must never panic, and a success never leaves braces behind
        if let Ok(expanded) = stacksort::expand_braces(pattern) {
            assert!(expanded
                .iter()
                .all(|item| !item.contains('{') && !item.contains('}')));
        }
    }
});
