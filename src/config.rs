use crate::error::{Result, TasacionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tasacion_common::{
    FilterOptions, ResetPolicy, SessionOptions, DEFAULT_TOLERANCE_HOURS, MIN_SAMPLE,
};

/// 許容幅の環境変数
pub const TOLERANCE_ENV: &str = "TASACION_TOLERANCE_HOURS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 目標稼働時間からの許容幅（±時間）
    pub tolerance_hours: u64,
    /// 評価額算出に必要な件数（3未満は3扱い）
    pub min_sample: usize,
    pub reset_policy: ResetPolicy,
    pub currency_symbol: String,
    /// `--hours` 省略時の目標稼働時間（0 = 絞込みなし）
    pub default_target_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance_hours: DEFAULT_TOLERANCE_HOURS,
            min_sample: MIN_SAMPLE,
            reset_policy: ResetPolicy::Always,
            currency_symbol: "€".into(),
            default_target_hours: 0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from_with_env(&Self::config_path()?)
    }

    /// 指定パスから読み込み、環境変数で上書き
    pub fn load_from_with_env(path: &Path) -> Result<Self> {
        let tolerance = std::env::var(TOLERANCE_ENV).ok();
        Self::load_from(path)?.with_overrides(tolerance.as_deref())
    }

    /// 指定パスから読み込み（無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TasacionError::Config("No se encuentra el directorio personal".into()))?;
        Ok(home.join(".config").join("tasacion").join("config.json"))
    }

    /// 環境変数の値を設定ファイルより優先
    pub fn with_overrides(mut self, tolerance: Option<&str>) -> Result<Self> {
        if let Some(value) = tolerance {
            self.tolerance_hours = parse_tolerance(value)?;
        }
        Ok(self)
    }

    pub fn set_tolerance(&mut self, hours: u64) -> Result<()> {
        self.tolerance_hours = hours;
        self.save()
    }

    /// パイプラインへ渡す設定
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            filter: FilterOptions {
                tolerance_hours: self.tolerance_hours,
            },
            reset_policy: self.reset_policy,
            min_sample: self.min_sample.max(MIN_SAMPLE),
        }
    }
}

pub fn parse_tolerance(value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        TasacionError::Config(format!("{} inválido ({}): {}", TOLERANCE_ENV, value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tolerance_hours, 1000);
        assert_eq!(config.min_sample, 3);
        assert_eq!(config.reset_policy, ResetPolicy::Always);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_session_options_floors_min_sample() {
        let config = Config {
            min_sample: 1,
            tolerance_hours: 500,
            ..Default::default()
        };
        let options = config.session_options();
        assert_eq!(options.min_sample, 3);
        assert_eq!(options.filter.tolerance_hours, 500);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(Some("250")).unwrap();
        assert_eq!(config.tolerance_hours, 250);

        let untouched = Config::default().with_overrides(None).unwrap();
        assert_eq!(untouched.tolerance_hours, 1000);

        let result = Config::default().with_overrides(Some("mil"));
        assert!(matches!(result, Err(TasacionError::Config(_))));
    }

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(parse_tolerance(" 1500 ").unwrap(), 1500);
        assert!(matches!(parse_tolerance("-1"), Err(TasacionError::Config(_))));
    }
}
