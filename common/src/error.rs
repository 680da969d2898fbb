//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// バックエンドとの境界で起こり得る失敗を区別する:
/// - Backend: レスポンスの`error`フィールド（そのままユーザーに表示）
/// - Json: レスポンスがJSONとして不正
/// - UnexpectedFormat: JSONは正しいが期待したフィールドがない
/// - Unavailable: 通信自体の失敗（固定メッセージに置き換える）
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Backend(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("サーバーから予期しない形式の応答が返されました")]
    UnexpectedFormat,

    #[error("{0}")]
    Unavailable(&'static str),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_backend() {
        let error = Error::Backend("Both files are required!".to_string());
        assert_eq!(format!("{}", error), "Both files are required!");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_unexpected_format() {
        let error = Error::UnexpectedFormat;
        let display = format!("{}", error);
        assert!(display.contains("予期しない形式"));
    }

    #[test]
    fn test_error_display_unavailable() {
        let error = Error::Unavailable("サーバーが利用できない可能性があります。");
        assert_eq!(format!("{}", error), "サーバーが利用できない可能性があります。");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Backend("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Backend"));
        assert!(debug.contains("テスト"));
    }
}
