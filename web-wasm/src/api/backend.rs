//! DocGPT バックエンドAPI呼び出し
//!
//! 機能ごとに1関数。multipartフォームまたはJSONボディでPOSTし、
//! レスポンスボディをdocgpt-commonの契約型にパースして返す。
//! 通信自体の失敗はコンソールにだけ記録し、ユーザーには
//! 機能ごとの固定文言を見せる。

use docgpt_common::{
    parse_error_message, parse_response, CodecMethod, CodecRequest, CodecResponse,
    ComparisonResponse, Error, QaResponse, Result, SummaryResponse, TranslationResponse,
    VoiceSearchResponse,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// バックエンドのオリジン（固定）
const API_BASE_URL: &str = "http://localhost:5000";

/// fetchの生の結果
///
/// HTTPステータスで分岐するのは要約エンドポイントだけだが、
/// ボディと一緒に持ち回る
struct RawResponse {
    ok: bool,
    body: String,
}

async fn send(request: Request) -> std::result::Result<RawResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let ok = resp.ok();
    let text = JsFuture::from(resp.text()?).await?;
    Ok(RawResponse {
        ok,
        body: text.as_string().unwrap_or_default(),
    })
}

async fn post_form(path: &str, form: &FormData) -> std::result::Result<RawResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&format!("{}{}", API_BASE_URL, path), &opts)?;
    send(request).await
}

async fn post_json(path: &str, body: &str) -> std::result::Result<RawResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(&format!("{}{}", API_BASE_URL, path), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    send(request).await
}

/// 通信失敗をコンソールに残し、固定文言に置き換える
fn unavailable(context: &'static str, fallback: &'static str, err: JsValue) -> Error {
    gloo::console::error!(context, err);
    Error::Unavailable(fallback)
}

/// 2つのファイルを比較する
pub async fn compare_files(file1: &File, file2: &File) -> Result<ComparisonResponse> {
    let raw = async {
        let form = FormData::new()?;
        form.append_with_blob_and_filename("file1", file1, &file1.name())?;
        form.append_with_blob_and_filename("file2", file2, &file2.name())?;
        post_form("/comparefile", &form).await
    }
    .await;

    match raw {
        Ok(raw) => parse_response(&raw.body),
        Err(err) => Err(unavailable(
            "ファイル比較リクエストに失敗:",
            "ファイル比較に失敗しました。サーバーが利用できない可能性があります。",
            err,
        )),
    }
}

/// 音声ファイルのキーワードで文書内を検索する
pub async fn search_with_voice(
    audio_file: &File,
    document_file: &File,
) -> Result<VoiceSearchResponse> {
    let raw = async {
        let form = FormData::new()?;
        form.append_with_blob_and_filename("audio_file", audio_file, &audio_file.name())?;
        form.append_with_blob_and_filename(
            "document_file",
            document_file,
            &document_file.name(),
        )?;
        post_form("/search_in_document_with_voice", &form).await
    }
    .await;

    match raw {
        Ok(raw) => parse_response(&raw.body),
        Err(err) => Err(unavailable(
            "音声検索リクエストに失敗:",
            "検索に失敗しました。サーバーが利用できない可能性があります。",
            err,
        )),
    }
}

/// 文書について質問リストの回答を得る
///
/// 質問は表示順のまま`questions[]`として繰り返し送る
pub async fn ask_questions(document_file: &File, questions: &[String]) -> Result<QaResponse> {
    let raw = async {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(
            "document_file",
            document_file,
            &document_file.name(),
        )?;
        for question in questions {
            form.append_with_str("questions[]", question)?;
        }
        post_form("/qamodel", &form).await
    }
    .await;

    match raw {
        Ok(raw) => parse_response(&raw.body),
        Err(err) => Err(unavailable(
            "Q&Aリクエストに失敗:",
            "回答の取得に失敗しました。サーバーが利用できない可能性があります。",
            err,
        )),
    }
}

/// 文書を指定文数で要約する
///
/// このエンドポイントだけはHTTPステータスでも分岐し、
/// 非2xxのボディからエラー文言を抽出する
pub async fn summarize_document(document_file: &File, sentences: u8) -> Result<SummaryResponse> {
    let raw = async {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(
            "document_file",
            document_file,
            &document_file.name(),
        )?;
        form.append_with_str("num_sentences", &sentences.to_string())?;
        post_form("/summarize", &form).await
    }
    .await;

    match raw {
        Ok(raw) => {
            if !raw.ok {
                return Err(Error::Backend(parse_error_message(&raw.body)));
            }
            parse_response(&raw.body)
        }
        Err(err) => Err(unavailable(
            "要約リクエストに失敗:",
            "要約に失敗しました。サーバーが利用できない可能性があります。",
            err,
        )),
    }
}

/// 文書を指定言語に翻訳する
pub async fn translate_document(
    document_file: &File,
    target_lang: &str,
) -> Result<TranslationResponse> {
    let raw = async {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(
            "document_file",
            document_file,
            &document_file.name(),
        )?;
        form.append_with_str("target_lang", target_lang)?;
        post_form("/translate", &form).await
    }
    .await;

    match raw {
        Ok(raw) => parse_response(&raw.body),
        Err(err) => Err(unavailable(
            "翻訳リクエストに失敗:",
            "翻訳に失敗しました。サーバーが利用できない可能性があります。",
            err,
        )),
    }
}

/// テキストを指定方式でエンコードする
pub async fn encode_text(text: String, method: CodecMethod) -> Result<CodecResponse> {
    codec_request(
        "/encode",
        text,
        method,
        "エンコードリクエストに失敗:",
        "エンコードに失敗しました。サーバーが利用できない可能性があります。",
    )
    .await
}

/// テキストを指定方式でデコードする
pub async fn decode_text(text: String, method: CodecMethod) -> Result<CodecResponse> {
    codec_request(
        "/decode",
        text,
        method,
        "デコードリクエストに失敗:",
        "デコードに失敗しました。サーバーが利用できない可能性があります。",
    )
    .await
}

async fn codec_request(
    path: &str,
    text: String,
    method: CodecMethod,
    context: &'static str,
    fallback: &'static str,
) -> Result<CodecResponse> {
    let body = serde_json::to_string(&CodecRequest { text, method })?;

    match post_json(path, &body).await {
        Ok(raw) => parse_response(&raw.body),
        Err(err) => Err(unavailable(context, fallback, err)),
    }
}
