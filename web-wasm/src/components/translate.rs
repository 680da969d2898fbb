//! 翻訳ビュー

use docgpt_common::{DEFAULT_TARGET_LANG, TARGET_LANGUAGES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

#[component]
pub fn TranslateView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (target_lang, set_target_lang) = signal(DEFAULT_TARGET_LANG);
    let (file, set_file) = signal_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (translated_text, set_translated_text) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_file = move |new_file: File| {
        set_file_name.set(Some(new_file.name()));
        set_file.set(Some(new_file));
        // ファイルを差し替えたら前回の結果は消す
        set_translated_text.set(String::new());
    };

    let on_translate = move |_| {
        let Some(selected) = file.get_untracked() else {
            toaster.error("翻訳する文書をアップロードしてください");
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::translate_document(&selected, target_lang.get_untracked()).await {
                Ok(response) => {
                    set_translated_text.set(response.translated_text);
                    toaster.success("翻訳が完了しました");
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    let on_clear = move |_| {
        set_file.set(None);
        set_file_name.set(None);
        set_translated_text.set(String::new());
    };

    view! {
        <div class="view">
            <h2>"文書翻訳"</h2>
            <p class="text-muted">"アップロードした文書をそのまま指定言語へ翻訳します。"</p>

            <div class="form-group">
                <label>"翻訳先の言語"</label>
                <div class="language-chips">
                    {TARGET_LANGUAGES
                        .iter()
                        .map(|lang| {
                            let code = lang.code;
                            view! {
                                <button
                                    class=move || {
                                        if target_lang.get() == code { "chip active" } else { "chip" }
                                    }
                                    on:click=move |_| set_target_lang.set(code)
                                >
                                    {lang.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <UploadArea
                selected=file_name
                label="翻訳する文書をアップロード"
                accept=".txt,.json,.xml,.html,.csv,.md"
                on_file=on_file
            />

            <div class="form-group">
                <label>"翻訳結果"</label>
                <textarea
                    readonly
                    prop:value=move || translated_text.get()
                    placeholder="翻訳されたテキストがここに表示されます..."
                ></textarea>
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || is_loading.get() || file_name.get().is_none()
                    on:click=on_translate
                >
                    {move || if is_loading.get() { "翻訳中..." } else { "翻訳する" }}
                </button>
                <button class="btn btn-secondary" on:click=on_clear>
                    "クリア"
                </button>
            </div>
        </div>
    }
}
