//! Property tests for transfer output classification.

use proptest::prelude::*;

use syncwatch::domain::services::{parse_line, TransferLine, TransferOp};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/-][A-Za-z0-9 ._/-]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(line in "(?s).{0,256}") {
        let _ = parse_line(&line);
    }

    /// PROPERTY: `send`/`recv`/`del.` lines keep the path verbatim, spaces included.
    #[test]
    fn property_items_keep_path(
        token in prop_oneof![Just("send"), Just("recv"), Just("del.")],
        gap in " {1,4}",
        path in file_name(),
    ) {
        let parsed = parse_line(&format!("{token}{gap}{path}"));
        let op = if token == "del." { TransferOp::Deleted } else { TransferOp::Sent };
        prop_assert_eq!(parsed, TransferLine::Item { op, path: path.trim_start().to_string() });
    }
}
