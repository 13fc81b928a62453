#![no_main]

use libfuzzer_sys::fuzz_target;
use syncwatch::PendingPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Some(path) = PendingPath::new(raw) {
            // Parsing the rendered form must give the same path back.
            let again = PendingPath::new(path.to_string());
            assert_eq!(again, Some(path));
        }
    }
});
