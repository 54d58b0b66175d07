use super::*;
use proptest::prelude::*;

fn arb_update() -> impl Strategy<Value = ConfigUpdate> {
    (
        proptest::option::of("[a-z]{1,10}\\.db"),
        proptest::option::of("[a-z0-9.]{1,15}"),
        proptest::option::of(any::<u16>()),
        proptest::option::of("[a-z]{1,10}".prop_map(PathBuf::from)),
    )
        .prop_map(|(database_url, host, port, log_dir)| ConfigUpdate {
            database_url,
            host,
            port,
            log_dir,
        })
}

proptest! {
    /// CF1.1: an empty update is the identity
    #[test]
    fn prop_cf1_1_empty_update_is_identity(update in arb_update()) {
        let config = base_config(None).apply_update(update);
        prop_assert_eq!(config.clone().apply_update(ConfigUpdate::default()), config);
    }

    /// CF1.2: every field set in the update wins
    #[test]
    fn prop_cf1_2_update_fields_win(update in arb_update()) {
        let base = base_config(None);
        let merged = base.clone().apply_update(update.clone());

        prop_assert_eq!(merged.database_url, update.database_url.unwrap_or(base.database_url));
        prop_assert_eq!(merged.host, update.host.unwrap_or(base.host));
        prop_assert_eq!(merged.port, update.port.unwrap_or(base.port));
        prop_assert_eq!(merged.log_dir, update.log_dir.or(base.log_dir));
    }

    /// CF1.3: applying the same update twice changes nothing further
    #[test]
    fn prop_cf1_3_apply_is_idempotent(update in arb_update()) {
        let once = base_config(None).apply_update(update.clone());
        let twice = once.clone().apply_update(update);
        prop_assert_eq!(once, twice);
    }
}
