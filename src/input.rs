//! 調査テキストの読み込み
//!
//! LLM呼び出しは外部で行い、そのMarkdown出力をファイルか標準入力で受け取る。

use crate::error::{Result, TasacionError};
use std::io::Read;
use std::path::Path;

/// `-` は標準入力
pub fn read_scan_text(path: &Path) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(TasacionError::FileNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        return Err(TasacionError::EmptyInput(path.display().to_string()));
    }

    Ok(text)
}
