use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<GalleryConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    GalleryConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.store.url, "");
    assert_eq!(cfg.store.service_key, "");
    assert_eq!(cfg.store.table, DEFAULT_IMAGES_TABLE);
    assert_eq!(cfg.store.connect_timeout, Duration::from_secs(DEFAULT_STORE_CONNECT_TIMEOUT_SECS));
    assert_eq!(cfg.store.request_timeout, None);
    assert_eq!(cfg.session_ttl, Duration::from_secs(DEFAULT_SESSION_TTL_SECS));
    assert_eq!(cfg.sweep_interval, Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS));
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("SUPABASE_URL", "https://abc.supabase.test/"),
        ("SUPABASE_SERVICE_KEY", "service-secret"),
        ("GALLERY_TABLE", "plants"),
        ("STORE_CONNECT_TIMEOUT_SECS", "3"),
        ("STORE_REQUEST_TIMEOUT_SECS", "15"),
        ("SESSION_TTL_SECS", "120"),
        ("SESSION_SWEEP_INTERVAL_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store.url, "https://abc.supabase.test");
    assert_eq!(cfg.store.service_key, "service-secret");
    assert_eq!(cfg.store.table, "plants");
    assert_eq!(cfg.store.connect_timeout, Duration::from_secs(3));
    assert_eq!(cfg.store.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(cfg.session_ttl, Duration::from_secs(120));
    assert_eq!(cfg.sweep_interval, Duration::from_secs(5));
}

#[test]
fn invalid_port_is_an_error() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn unparsable_timeouts_fall_back_to_defaults() {
    let cfg = config_from(&[("STORE_CONNECT_TIMEOUT_SECS", "soon"), ("STORE_REQUEST_TIMEOUT_SECS", "never")]).unwrap();
    assert_eq!(cfg.store.connect_timeout, Duration::from_secs(DEFAULT_STORE_CONNECT_TIMEOUT_SECS));
    assert_eq!(cfg.store.request_timeout, None);
}

#[test]
fn sweep_interval_has_a_floor_of_one_second() {
    let cfg = config_from(&[("SESSION_SWEEP_INTERVAL_SECS", "0")]).unwrap();
    assert_eq!(cfg.sweep_interval, Duration::from_secs(1));
}

#[test]
fn empty_table_name_uses_default() {
    let cfg = config_from(&[("GALLERY_TABLE", "")]).unwrap();
    assert_eq!(cfg.store.table, DEFAULT_IMAGES_TABLE);
}
