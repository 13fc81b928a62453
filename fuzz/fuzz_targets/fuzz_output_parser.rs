#![no_main]

use libfuzzer_sys::fuzz_target;
use syncwatch::domain::services::{parse_line, TransferLine};

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    if let TransferLine::Item { path, .. } = parse_line(&line) {
        assert!(!path.is_empty());
    }
});
