//! DocGPT Common Library
//!
//! Web(WASM)クライアントと共有される型とユーティリティ

pub mod error;
pub mod parser;
pub mod request;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_error_message, parse_response};
pub use request::{
    clamp_summary_sentences, CodecMethod, CodecRequest, Language, DEFAULT_TARGET_LANG,
    SUMMARY_SENTENCES_DEFAULT, SUMMARY_SENTENCES_MAX, SUMMARY_SENTENCES_MIN, TARGET_LANGUAGES,
};
pub use types::{
    CodecResponse, ComparisonResponse, QaPair, QaResponse, SummaryResponse, TranslationResponse,
    VoiceSearchResponse,
};
