//! ファイルアップロードコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで1ファイルを選び、
//! コールバックで親に渡す。選択状態は親が持つ。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    /// 選択中のファイル名（未選択ならNone）
    #[prop(into)]
    selected: Signal<Option<String>>,
    /// 未選択時に表示する案内文
    label: &'static str,
    /// input要素のaccept属性
    #[prop(default = ".pdf,.txt,.json,.xml,.html,.csv,.md")]
    accept: &'static str,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                if let Some(file) = files.get(0) {
                    on_file(file);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let input = event_target::<HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file(file);
            }
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                class="hidden"
                accept=accept
                node_ref=input_ref
                on:change=on_change
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            />

            <div class="upload-icon">"📄"</div>
            <p class="upload-label">
                {move || selected.get().unwrap_or_else(|| label.to_string())}
            </p>
            <p class="text-muted">
                {move || {
                    if selected.get().is_some() {
                        "クリックでファイルを変更"
                    } else {
                        "ドラッグ&ドロップ または クリックで選択"
                    }
                }}
            </p>
        </div>
    }
}
