//! # Configuration Tests
//!
//! Defaults, JSON deserialization, policy tokens and validation.

use cachesim_core::common::ConfigError;
use cachesim_core::config::*;
use rstest::rstest;

#[test]
fn test_cache_config_defaults() {
    let config = CacheConfig::default();
    assert_eq!(config.num_sets, 256);
    assert_eq!(config.block_size, 4);
    assert_eq!(config.associativity, 1);
    assert_eq!(config.policy, ReplacementPolicy::Lru);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_seed() {
    let config = CacheConfig::new(4, 8, 2, ReplacementPolicy::Random).with_seed(42);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_capacity_bytes() {
    let config = CacheConfig::new(64, 16, 4, ReplacementPolicy::Fifo);
    assert_eq!(config.capacity_bytes(), 4096);
    assert_eq!(config.total_entries(), Ok(256));
}

#[test]
fn test_json_deserialization_full() {
    let json = r#"{
        "num_sets": 128,
        "block_size": 32,
        "associativity": 8,
        "policy": "R",
        "seed": 99
    }"#;
    let config = CacheConfig::from_json(json).unwrap();
    assert_eq!(
        config,
        CacheConfig::new(128, 32, 8, ReplacementPolicy::Random).with_seed(99)
    );
}

#[test]
fn test_json_deserialization_defaults_and_alias() {
    let config = CacheConfig::from_json(r#"{ "assoc": 2, "policy": "FIFO" }"#).unwrap();
    assert_eq!(config.num_sets, 256);
    assert_eq!(config.block_size, 4);
    assert_eq!(config.associativity, 2);
    assert_eq!(config.policy, ReplacementPolicy::Fifo);
}

#[test]
fn test_json_rejects_unknown_fields() {
    let err = CacheConfig::from_json(r#"{ "latency": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_json_rejects_unknown_policy() {
    let err = CacheConfig::from_json(r#"{ "policy": "PLRU" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_json_roundtrip_uses_short_tokens() {
    let config = CacheConfig::new(2, 4, 1, ReplacementPolicy::Lru);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""policy":"L""#));
    assert_eq!(CacheConfig::from_json(&json).unwrap(), config);
}

#[rstest]
#[case("R", ReplacementPolicy::Random)]
#[case("r", ReplacementPolicy::Random)]
#[case("random", ReplacementPolicy::Random)]
#[case("L", ReplacementPolicy::Lru)]
#[case("LRU", ReplacementPolicy::Lru)]
#[case("F", ReplacementPolicy::Fifo)]
#[case(" fifo ", ReplacementPolicy::Fifo)]
fn test_policy_from_str(#[case] token: &str, #[case] expected: ReplacementPolicy) {
    assert_eq!(token.parse::<ReplacementPolicy>(), Ok(expected));
}

#[rstest]
#[case("")]
#[case("X")]
#[case("MRU")]
fn test_policy_from_str_rejects(#[case] token: &str) {
    assert_eq!(
        token.parse::<ReplacementPolicy>(),
        Err(ConfigError::UnknownPolicy(token.to_string()))
    );
}

#[test]
fn test_policy_tokens_and_names() {
    assert_eq!(ReplacementPolicy::Random.token(), 'R');
    assert_eq!(ReplacementPolicy::Lru.token(), 'L');
    assert_eq!(ReplacementPolicy::Fifo.token(), 'F');
    assert_eq!(ReplacementPolicy::Lru.to_string(), "LRU");
    assert!(ReplacementPolicy::Fifo.tracks_order());
    assert!(!ReplacementPolicy::Random.tracks_order());
}

#[test]
fn test_output_mode_from_u8() {
    assert_eq!(OutputMode::try_from(0), Ok(OutputMode::Verbose));
    assert_eq!(OutputMode::try_from(1), Ok(OutputMode::Compact));
    assert_eq!(
        OutputMode::try_from(2),
        Err(ConfigError::UnknownOutputMode(2))
    );
}

#[rstest]
#[case(CacheConfig::new(3, 4, 1, ReplacementPolicy::Lru), ConfigError::SetsNotPowerOfTwo(3))]
#[case(CacheConfig::new(0, 4, 1, ReplacementPolicy::Lru), ConfigError::SetsNotPowerOfTwo(0))]
#[case(CacheConfig::new(4, 6, 1, ReplacementPolicy::Fifo), ConfigError::BlockSizeNotPowerOfTwo(6))]
#[case(CacheConfig::new(4, 4, 0, ReplacementPolicy::Random), ConfigError::ZeroAssociativity)]
#[case(
    CacheConfig::new(1 << 62, 4, usize::MAX, ReplacementPolicy::Lru),
    ConfigError::GeometryOverflow { num_sets: 1 << 62, associativity: usize::MAX }
)]
#[case(
    CacheConfig::new(1 << 60, 4, 1, ReplacementPolicy::Lru),
    ConfigError::GeometryOverflow { num_sets: 1 << 60, associativity: 1 }
)]
#[case(
    CacheConfig::new(1 << 32, 4, 1 << 32, ReplacementPolicy::Fifo),
    ConfigError::GeometryOverflow { num_sets: 1 << 32, associativity: 1 << 32 }
)]
fn test_validate_rejects(#[case] config: CacheConfig, #[case] expected: ConfigError) {
    assert_eq!(config.validate(), Err(expected));
}

#[test]
fn test_validate_accepts_minimal_cache() {
    assert!(CacheConfig::new(1, 1, 1, ReplacementPolicy::Random).validate().is_ok());
}
