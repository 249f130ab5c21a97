#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(stdout) = std::str::from_utf8(data) {
        // Fuzz collaborator output parsing - this should never panic
        let _ = portalmod::infrastructure::build::parse_output(stdout);
    }
});
