//! レスポンスパーサー
//!
//! バックエンドの応答は常に単一のJSONオブジェクト。
//! 空でない`error`フィールドが存在すれば他のフィールドより優先し、
//! その文字列をそのままユーザーに見せる。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// レスポンスボディを各機能の成功型にパースする
///
/// 判定順序:
/// 1. JSONとして不正 -> `Error::Json`
/// 2. 空でない`error`フィールドあり -> `Error::Backend`（HTTPステータスに関係なく）
/// 3. 期待フィールドが欠落 -> `Error::UnexpectedFormat`
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        if !message.is_empty() {
            return Err(Error::Backend(message.to_string()));
        }
    }

    serde_json::from_value(value).map_err(|_| Error::UnexpectedFormat)
}

/// エラーボディから`error`フィールドを取り出す
///
/// 要約エンドポイントだけはHTTPステータスで分岐し、非2xxの
/// ボディからエラー文言を抽出する。取り出せなければ固定文言。
pub fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("error"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "サーバーエラーが発生しました".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComparisonResponse, SummaryResponse};

    #[test]
    fn test_parse_response_success() {
        let body = r#"{"comparison_result": "diff text"}"#;
        let response: ComparisonResponse = parse_response(body).expect("パース失敗");
        assert_eq!(response.comparison_result, "diff text");
    }

    #[test]
    fn test_parse_response_error_field_takes_precedence() {
        // errorフィールドがあれば成功フィールドが揃っていても失敗扱い
        let body = r#"{"error": "Both files are required!", "comparison_result": "x"}"#;
        let result = parse_response::<ComparisonResponse>(body);
        match result {
            Err(Error::Backend(message)) => assert_eq!(message, "Both files are required!"),
            other => panic!("Backendエラーを期待: {:?}", other),
        }
    }

    #[test]
    fn test_parse_response_empty_error_is_ignored() {
        let body = r#"{"error": "", "comparison_result": "diff text"}"#;
        let response: ComparisonResponse = parse_response(body).expect("パース失敗");
        assert_eq!(response.comparison_result, "diff text");
    }

    #[test]
    fn test_parse_response_missing_field_is_unexpected_format() {
        let result = parse_response::<SummaryResponse>("{}");
        assert!(matches!(result, Err(Error::UnexpectedFormat)));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let result = parse_response::<SummaryResponse>("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_error_message_with_error_field() {
        let body = r#"{"error": "Number of sentences must be an integer!"}"#;
        assert_eq!(
            parse_error_message(body),
            "Number of sentences must be an integer!"
        );
    }

    #[test]
    fn test_parse_error_message_fallback() {
        assert_eq!(parse_error_message("{}"), "サーバーエラーが発生しました");
        assert_eq!(parse_error_message("not json"), "サーバーエラーが発生しました");
        assert_eq!(parse_error_message(r#"{"error": ""}"#), "サーバーエラーが発生しました");
    }
}
