//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// テーブル不正・項目不正・サンプル不足はエラーにせず、
/// 空の結果や `None` で表現する。ここに来るのは呼び出し側の誤りだけ。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("target hours must be non-negative, got {0}")]
    NegativeTargetHours(i64),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_negative_target() {
        let error = Error::NegativeTargetHours(-5);
        assert_eq!(
            format!("{}", error),
            "target hours must be non-negative, got -5"
        );
    }
}
