//! API境界の契約テスト
//!
//! 各エンドポイントのレスポンス形状と、errorフィールド優先の
//! 共通ルールをエンドポイント横断で確認する。

use docgpt_common::{
    clamp_summary_sentences, parse_error_message, parse_response, CodecMethod, CodecRequest,
    CodecResponse, ComparisonResponse, Error, QaResponse, SummaryResponse, TranslationResponse,
    VoiceSearchResponse,
};

#[test]
fn compare_success_shape() {
    let body = r#"{"comparison_result": "--- File 1\n+++ File 2\n@@ -1 +1 @@\n-a\n+b"}"#;
    let response: ComparisonResponse = parse_response(body).expect("パース失敗");
    assert!(response.comparison_result.starts_with("--- File 1"));
}

#[test]
fn codec_success_shape() {
    let body = r#"{"result": "aGVsbG8gd29ybGQ="}"#;
    let response: CodecResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.result, "aGVsbG8gd29ybGQ=");
}

#[test]
fn translate_success_shape() {
    let body = r#"{"translated_text": "hola mundo"}"#;
    let response: TranslationResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.translated_text, "hola mundo");
}

#[test]
fn qa_answers_echo_question_count_and_order() {
    // バックエンドは質問1件につき回答1件を同順で返す
    let questions = ["What is it about?", "Who is the author?", "When was it written?"];
    let body = r#"{
        "answers": [
            {"question": "What is it about?", "answer": "A contract."},
            {"question": "Who is the author?", "answer": "Unknown."},
            {"question": "When was it written?", "answer": "2023."}
        ]
    }"#;
    let response: QaResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.answers.len(), questions.len());
    for (pair, question) in response.answers.iter().zip(questions) {
        assert_eq!(pair.question, question);
    }
}

#[test]
fn voice_search_success_shape() {
    let body = r#"{"transcribed_keyword": "budget", "search_result": "Keyword not found in document."}"#;
    let response: VoiceSearchResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.transcribed_keyword, "budget");
    assert_eq!(response.search_result, "Keyword not found in document.");
}

#[test]
fn error_field_wins_on_every_endpoint_shape() {
    let body = r#"{"error": "Could not read the document!"}"#;

    assert!(matches!(
        parse_response::<ComparisonResponse>(body),
        Err(Error::Backend(_))
    ));
    assert!(matches!(
        parse_response::<CodecResponse>(body),
        Err(Error::Backend(_))
    ));
    assert!(matches!(
        parse_response::<TranslationResponse>(body),
        Err(Error::Backend(_))
    ));
    assert!(matches!(
        parse_response::<QaResponse>(body),
        Err(Error::Backend(_))
    ));
    assert!(matches!(
        parse_response::<SummaryResponse>(body),
        Err(Error::Backend(_))
    ));
    assert!(matches!(
        parse_response::<VoiceSearchResponse>(body),
        Err(Error::Backend(_))
    ));
}

#[test]
fn error_message_is_shown_verbatim() {
    let body = r#"{"error": "Unsupported encoding method: rot13"}"#;
    let error = parse_response::<CodecResponse>(body).unwrap_err();
    assert_eq!(error.to_string(), "Unsupported encoding method: rot13");
}

#[test]
fn summary_without_field_is_unexpected_format_not_backend_error() {
    // summaryフィールド欠落は明示的なerrorとは別扱い（現行挙動を維持）
    let result = parse_response::<SummaryResponse>("{}");
    match result {
        Err(Error::UnexpectedFormat) => {}
        other => panic!("UnexpectedFormatを期待: {:?}", other),
    }
}

#[test]
fn summary_success_shape() {
    let body = r#"{"summary": "The document covers three points."}"#;
    let response: SummaryResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.summary, "The document covers three points.");
}

#[test]
fn unknown_extra_fields_are_tolerated() {
    let body = r#"{"summary": "short", "elapsed_ms": 120}"#;
    let response: SummaryResponse = parse_response(body).expect("パース失敗");
    assert_eq!(response.summary, "short");
}

#[test]
fn non_ok_body_error_extraction() {
    assert_eq!(
        parse_error_message(r#"{"error": "Invalid file type!"}"#),
        "Invalid file type!"
    );
    assert_eq!(
        parse_error_message(r#"{"detail": "gateway timeout"}"#),
        "サーバーエラーが発生しました"
    );
}

#[test]
fn codec_request_wire_format() {
    let json = serde_json::to_string(&CodecRequest {
        text: "SOS".to_string(),
        method: CodecMethod::Morse,
    })
    .expect("シリアライズ失敗");
    assert_eq!(json, r#"{"text":"SOS","method":"morse"}"#);
}

#[test]
fn summary_sentence_bounds() {
    assert_eq!(clamp_summary_sentences(0), 1);
    assert_eq!(clamp_summary_sentences(11), 10);
    for sentences in 1..=10 {
        assert_eq!(clamp_summary_sentences(sentences), sentences);
    }
}
