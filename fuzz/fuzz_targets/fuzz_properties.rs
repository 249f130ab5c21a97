#![no_main]

use libfuzzer_sys::fuzz_target;
use portalmod::infrastructure::repositories::properties::{decode_latin1, parse, render};

fuzz_target!(|data: &[u8]| {
    // Any byte string decodes; parse must not panic, and what it accepts re-renders losslessly
    if let Ok(props) = parse(&decode_latin1(data)) {
        let rendered = render(&props, None);
        assert_eq!(parse(&rendered).ok(), Some(props));
    }
});
