//! リクエスト側の型と定数
//!
//! エンコード/デコードのJSONペイロード、翻訳先言語の一覧、
//! 要約文数の範囲など、送信前にクライアント側で決まる値。

use serde::{Deserialize, Serialize};

/// エンコード/デコード方式
///
/// ワイヤ上は小文字の文字列（`"base64"`など）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecMethod {
    Base64,
    Url,
    Html,
    Morse,
}

impl CodecMethod {
    pub const ALL: [CodecMethod; 4] = [
        CodecMethod::Base64,
        CodecMethod::Url,
        CodecMethod::Html,
        CodecMethod::Morse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecMethod::Base64 => "base64",
            CodecMethod::Url => "url",
            CodecMethod::Html => "html",
            CodecMethod::Morse => "morse",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            CodecMethod::Base64 => "Base64",
            CodecMethod::Url => "URL",
            CodecMethod::Html => "HTMLエンティティ",
            CodecMethod::Morse => "モールス符号",
        }
    }
}

/// `/encode` `/decode` のJSONボディ
#[derive(Debug, Clone, Serialize)]
pub struct CodecRequest {
    pub text: String,
    pub method: CodecMethod,
}

/// 翻訳先言語
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// バックエンドに渡す言語コード
    pub code: &'static str,
    /// 画面表示名
    pub name: &'static str,
}

/// 翻訳ビューで選択できる言語一覧
pub const TARGET_LANGUAGES: &[Language] = &[
    Language { code: "es", name: "スペイン語" },
    Language { code: "fr", name: "フランス語" },
    Language { code: "de", name: "ドイツ語" },
    Language { code: "it", name: "イタリア語" },
    Language { code: "pt", name: "ポルトガル語" },
    Language { code: "ru", name: "ロシア語" },
    Language { code: "zh-CN", name: "中国語（簡体）" },
    Language { code: "ja", name: "日本語" },
    Language { code: "ar", name: "アラビア語" },
    Language { code: "hi", name: "ヒンディー語" },
];

pub const DEFAULT_TARGET_LANG: &str = "es";

/// 要約文数の範囲
pub const SUMMARY_SENTENCES_MIN: u8 = 1;
pub const SUMMARY_SENTENCES_MAX: u8 = 10;
pub const SUMMARY_SENTENCES_DEFAULT: u8 = 5;

/// 要約文数を1〜10に丸める
pub fn clamp_summary_sentences(sentences: u8) -> u8 {
    sentences.clamp(SUMMARY_SENTENCES_MIN, SUMMARY_SENTENCES_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_method_serialize_lowercase() {
        for method in CodecMethod::ALL {
            let json = serde_json::to_string(&method).expect("シリアライズ失敗");
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }

    #[test]
    fn test_codec_request_serialize() {
        let request = CodecRequest {
            text: "hello world".to_string(),
            method: CodecMethod::Base64,
        };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"hello world","method":"base64"}"#);
    }

    #[test]
    fn test_codec_method_deserialize() {
        let method: CodecMethod = serde_json::from_str("\"morse\"").expect("デシリアライズ失敗");
        assert_eq!(method, CodecMethod::Morse);
    }

    #[test]
    fn test_target_languages_default_is_listed() {
        assert!(TARGET_LANGUAGES
            .iter()
            .any(|lang| lang.code == DEFAULT_TARGET_LANG));
    }

    #[test]
    fn test_clamp_summary_sentences() {
        assert_eq!(clamp_summary_sentences(0), 1);
        assert_eq!(clamp_summary_sentences(5), 5);
        assert_eq!(clamp_summary_sentences(10), 10);
        assert_eq!(clamp_summary_sentences(200), 10);
    }
}
