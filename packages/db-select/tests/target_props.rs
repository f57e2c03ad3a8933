//! Property tests for target resolution defaults.

use db_select::{ConnectionTarget, DEFAULT_DB_NAME, DEFAULT_PORT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn falsy_port_resolves_to_default(
        name in proptest::option::of("[a-zA-Z0-9_]{1,16}"),
        port in prop_oneof![Just(None), Just(Some(0u16))],
    ) {
        let target = ConnectionTarget::resolve(port, name.as_deref());
        prop_assert_eq!(target.port(), DEFAULT_PORT);
    }

    #[test]
    fn falsy_name_resolves_to_default(
        port in proptest::option::of(any::<u16>()),
        name in prop_oneof![Just(None), Just(Some(String::new()))],
    ) {
        let target = ConnectionTarget::resolve(port, name.as_deref());
        prop_assert_eq!(target.db_name(), DEFAULT_DB_NAME);
    }

    #[test]
    fn present_values_are_concatenated_verbatim(
        port in 1u16..=u16::MAX,
        name in "[^\\x00]{1,32}",
    ) {
        let target = ConnectionTarget::resolve(Some(port), Some(&name));
        prop_assert_eq!(target.to_string(), format!("localhost:{}/{}", port, name));
    }
}
