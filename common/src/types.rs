//! レスポンス型定義
//!
//! バックエンドの各エンドポイントが返すJSONオブジェクトに対応する型。
//! フィールド名はワイヤフォーマットそのまま（snake_case）。

use serde::{Deserialize, Serialize};

/// `/comparefile` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// unified diff形式の比較結果
    pub comparison_result: String,
}

/// `/encode` `/decode` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecResponse {
    pub result: String,
}

/// `/translate` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

/// 質問と回答のペア
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// `/qamodel` の成功レスポンス
///
/// 回答は送信した質問と同順で返る
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResponse {
    pub answers: Vec<QaPair>,
}

/// `/summarize` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// `/search_in_document_with_voice` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSearchResponse {
    /// 音声から書き起こした検索キーワード
    pub transcribed_keyword: String,
    /// キーワードが文書内に見つかったかどうかの判定文
    pub search_result: String,
}
