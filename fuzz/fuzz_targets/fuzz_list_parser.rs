#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz pipeline list inputs (delimited or JSON) - this should never panic
        let _ = stacksort::parse_input_list("FUZZ", raw);
    }
});
