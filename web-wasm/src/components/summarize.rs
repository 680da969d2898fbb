//! 要約ビュー

use docgpt_common::{clamp_summary_sentences, SUMMARY_SENTENCES_DEFAULT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

#[component]
pub fn SummarizeView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (file, set_file) = signal_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (sentences, set_sentences) = signal(SUMMARY_SENTENCES_DEFAULT);
    let (summary, set_summary) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    let on_file = move |new_file: File| {
        set_file_name.set(Some(new_file.name()));
        set_file.set(Some(new_file));
    };

    let on_summarize = move |_| {
        let Some(selected) = file.get_untracked() else {
            toaster.error("要約する文書をアップロードしてください");
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::summarize_document(&selected, sentences.get_untracked()).await {
                Ok(response) => {
                    set_summary.set(Some(response.summary));
                    toaster.success("要約が完了しました");
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="view">
            <h2>"文書要約"</h2>
            <p class="text-muted">"文書の要点を指定した文数にまとめます。"</p>

            <UploadArea selected=file_name label="要約する文書をアップロード" on_file=on_file />

            <div class="form-group">
                <label for="sentence-count">
                    {move || format!("要約文数: {}文", sentences.get())}
                </label>
                <input
                    type="range"
                    id="sentence-count"
                    min="1"
                    max="10"
                    prop:value=move || sentences.get().to_string()
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev)
                            .parse()
                            .unwrap_or(SUMMARY_SENTENCES_DEFAULT);
                        set_sentences.set(clamp_summary_sentences(parsed));
                    }
                />
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || is_loading.get() || file_name.get().is_none()
                    on:click=on_summarize
                >
                    {move || if is_loading.get() { "要約中..." } else { "要約する" }}
                </button>
            </div>

            <Show when=move || summary.get().is_some()>
                <div class="result-panel">
                    <h3>"要約結果"</h3>
                    <p class="result-body">{move || summary.get().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}
