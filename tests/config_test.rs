//! 設定ファイルテスト

use tasacion::config::Config;
use tasacion_common::ResetPolicy;
use tempfile::tempdir;

/// 設定ファイルが無ければデフォルト
#[test]
fn test_load_missing_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
    assert_eq!(config, Config::default());
}

/// 保存と再読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tasacion").join("config.json");

    let config = Config {
        tolerance_hours: 750,
        reset_policy: ResetPolicy::WhenEmpty,
        default_target_hours: 5000,
        ..Default::default()
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);
}

/// 欠けている項目はデフォルトで補完
#[test]
fn test_partial_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tolerance_hours": 1500}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.tolerance_hours, 1500);
    assert_eq!(config.min_sample, 3);
    assert_eq!(config.currency_symbol, "€");
    assert_eq!(config.reset_policy, ResetPolicy::Always);
}

/// 壊れたJSON
#[test]
fn test_invalid_config_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ tolerance_hours: ").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// reset_policy の表記
#[test]
fn test_reset_policy_serialized_kebab_case() {
    let config = Config {
        reset_policy: ResetPolicy::WhenEmpty,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"reset_policy\":\"when-empty\""));
}

/// 環境変数の許容幅が設定ファイルより優先される
///
/// 環境変数を触るテストはこの1本だけにする（並列実行で干渉するため）
#[test]
fn test_tolerance_env_override() {
    use tasacion::config::TOLERANCE_ENV;
    use tasacion::error::TasacionError;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tolerance_hours": 1500}"#).unwrap();

    std::env::set_var(TOLERANCE_ENV, "400");
    let config = Config::load_from_with_env(&path).expect("読み込み失敗");
    assert_eq!(config.tolerance_hours, 400);
    // 他の項目はファイルのまま
    assert_eq!(config.min_sample, 3);

    std::env::set_var(TOLERANCE_ENV, "cuatrocientas");
    let result = Config::load_from_with_env(&path);
    assert!(matches!(result, Err(TasacionError::Config(_))));

    std::env::remove_var(TOLERANCE_ENV);
    let config = Config::load_from_with_env(&path).expect("読み込み失敗");
    assert_eq!(config.tolerance_hours, 1500);
}
