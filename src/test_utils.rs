use proptest::prelude::*;

/// Generates strings that real clients send: empty, whitespace, unicode,
/// quotes and control characters included
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\"quoted\"".to_string()),
        "\\PC*",
        ".*",
    ]
}

/// Generates a JSON field name like the ones handlers require
pub fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}
