//! 音声検索ビュー
//!
//! 音声ファイルのキーワードを書き起こし、文書内を検索する。

use docgpt_common::VoiceSearchResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

#[component]
pub fn VoiceSearchView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (document_file, set_document_file) = signal_local(None::<File>);
    let (document_name, set_document_name) = signal(None::<String>);
    let (audio_file, set_audio_file) = signal_local(None::<File>);
    let (audio_name, set_audio_name) = signal(None::<String>);
    let (result, set_result) = signal(None::<VoiceSearchResponse>);
    let (is_loading, set_is_loading) = signal(false);

    let on_document = move |file: File| {
        set_document_name.set(Some(file.name()));
        set_document_file.set(Some(file));
    };
    let on_audio = move |file: File| {
        set_audio_name.set(Some(file.name()));
        set_audio_file.set(Some(file));
    };

    let on_search = move |_| {
        let (Some(audio), Some(document)) =
            (audio_file.get_untracked(), document_file.get_untracked())
        else {
            toaster.error("文書と音声ファイルの両方をアップロードしてください");
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::search_with_voice(&audio, &document).await {
                Ok(response) => {
                    set_result.set(Some(response));
                    toaster.success("検索が完了しました");
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="view">
            <h2>"音声検索"</h2>
            <p class="text-muted">
                "音声ファイルの内容をキーワードとして書き起こし、文書内を検索します。"
            </p>

            <div class="upload-grid">
                <div>
                    <h3>"検索対象の文書"</h3>
                    <UploadArea
                        selected=document_name
                        label="検索する文書をアップロード"
                        on_file=on_document
                    />
                </div>
                <div>
                    <h3>"音声クエリ"</h3>
                    <UploadArea
                        selected=audio_name
                        label="音声ファイルをアップロード"
                        accept="audio/*"
                        on_file=on_audio
                    />
                </div>
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || {
                        is_loading.get() || document_name.get().is_none()
                            || audio_name.get().is_none()
                    }
                    on:click=on_search
                >
                    {move || if is_loading.get() { "検索中..." } else { "検索する" }}
                </button>
            </div>

            <Show when=move || result.get().is_some()>
                <div class="result-panel">
                    <h3>"検索結果"</h3>
                    {move || {
                        result
                            .get()
                            .map(|response| {
                                view! {
                                    <div>
                                        <p class="text-muted">"書き起こしたキーワード:"</p>
                                        <p class="qa-question">
                                            {format!("「{}」", response.transcribed_keyword)}
                                        </p>
                                        <p class="text-muted">"判定:"</p>
                                        <p class="result-body">{response.search_result}</p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}
