//! エンコード/デコードビュー
//!
//! ファイルをクライアント側でテキストとして読み取り、
//! `{text, method}`のJSONボディで送信する。

use docgpt_common::CodecMethod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

/// 処理モード
#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum CodecMode {
    #[default]
    Encode,
    Decode,
}

impl CodecMode {
    fn label(self) -> &'static str {
        match self {
            CodecMode::Encode => "エンコード",
            CodecMode::Decode => "デコード",
        }
    }
}

#[component]
pub fn EncodeDecodeView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (mode, set_mode) = signal(CodecMode::default());
    let (method, set_method) = signal(CodecMethod::Base64);
    let (file, set_file) = signal_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (result, set_result) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_file = move |new_file: File| {
        set_file_name.set(Some(new_file.name()));
        set_file.set(Some(new_file));
        // ファイルを差し替えたら前回の結果は消す
        set_result.set(String::new());
    };

    let on_process = move |_| {
        let Some(selected) = file.get_untracked() else {
            toaster.error("処理する文書をアップロードしてください");
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            let selected = gloo::file::File::from(selected);
            let text = match gloo::file::futures::read_as_text(&selected).await {
                Ok(text) => text,
                Err(err) => {
                    gloo::console::error!("ファイル読み込みに失敗:", err.to_string());
                    toaster.error("ファイルの読み込みに失敗しました");
                    set_is_loading.set(false);
                    return;
                }
            };

            let current_mode = mode.get_untracked();
            let current_method = method.get_untracked();
            let outcome = match current_mode {
                CodecMode::Encode => api::encode_text(text, current_method).await,
                CodecMode::Decode => api::decode_text(text, current_method).await,
            };

            match outcome {
                Ok(response) => {
                    set_result.set(response.result);
                    toaster.success(format!("{}が完了しました", current_mode.label()));
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    let on_clear = move |_| {
        set_file.set(None);
        set_file_name.set(None);
        set_result.set(String::new());
    };

    view! {
        <div class="view">
            <h2>"エンコード/デコード"</h2>
            <p class="text-muted">
                "文書のテキストをBase64・URL・HTMLエンティティ・モールス符号に相互変換します。"
            </p>

            <div class="mode-tabs">
                {[CodecMode::Encode, CodecMode::Decode]
                    .into_iter()
                    .map(|m| {
                        view! {
                            <button
                                class=move || {
                                    if mode.get() == m { "tab-button active" } else { "tab-button" }
                                }
                                on:click=move |_| set_mode.set(m)
                            >
                                {m.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form-group">
                <label for="codec-method">"変換方式"</label>
                <select
                    id="codec-method"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(selected) =
                            CodecMethod::ALL.into_iter().find(|m| m.as_str() == value)
                        {
                            set_method.set(selected);
                        }
                    }
                >
                    {CodecMethod::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <option value=m.as_str() selected=move || method.get() == m>
                                    {m.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <UploadArea
                selected=file_name
                label="変換する文書をアップロード"
                accept=".txt,.json,.xml,.html,.csv,.md"
                on_file=on_file
            />

            <div class="form-group">
                <label>
                    {move || match mode.get() {
                        CodecMode::Encode => "エンコード結果",
                        CodecMode::Decode => "デコード結果",
                    }}
                </label>
                <textarea
                    readonly
                    prop:value=move || result.get()
                    placeholder="結果がここに表示されます..."
                ></textarea>
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || is_loading.get() || file_name.get().is_none()
                    on:click=on_process
                >
                    {move || {
                        if is_loading.get() {
                            "処理中...".to_string()
                        } else {
                            format!("{}する", mode.get().label())
                        }
                    }}
                </button>
                <button class="btn btn-secondary" on:click=on_clear>
                    "クリア"
                </button>
            </div>
        </div>
    }
}
