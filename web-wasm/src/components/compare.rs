//! ファイル比較ビュー

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

#[component]
pub fn CompareView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (file1, set_file1) = signal_local(None::<File>);
    let (file2, set_file2) = signal_local(None::<File>);
    let (file1_name, set_file1_name) = signal(None::<String>);
    let (file2_name, set_file2_name) = signal(None::<String>);
    let (result, set_result) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    let on_file1 = move |file: File| {
        set_file1_name.set(Some(file.name()));
        set_file1.set(Some(file));
    };
    let on_file2 = move |file: File| {
        set_file2_name.set(Some(file.name()));
        set_file2.set(Some(file));
    };

    let on_compare = move |_| {
        let (Some(f1), Some(f2)) = (file1.get_untracked(), file2.get_untracked()) else {
            toaster.error("比較する2つのファイルをアップロードしてください");
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::compare_files(&f1, &f2).await {
                Ok(response) => {
                    set_result.set(Some(response.comparison_result));
                    toaster.success("ファイル比較が完了しました");
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="view">
            <h2>"ファイル比較"</h2>
            <p class="text-muted">
                "2つの文書をアップロードすると、追加・削除・変更箇所を差分として表示します。"
            </p>

            <div class="upload-grid">
                <div>
                    <h3>"文書1"</h3>
                    <UploadArea
                        selected=file1_name
                        label="1つ目の文書をアップロード"
                        on_file=on_file1
                    />
                </div>
                <div>
                    <h3>"文書2"</h3>
                    <UploadArea
                        selected=file2_name
                        label="2つ目の文書をアップロード"
                        on_file=on_file2
                    />
                </div>
            </div>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || {
                        is_loading.get() || file1_name.get().is_none() || file2_name.get().is_none()
                    }
                    on:click=on_compare
                >
                    {move || if is_loading.get() { "比較中..." } else { "比較する" }}
                </button>
            </div>

            <Show when=move || result.get().is_some()>
                <div class="result-panel">
                    <h3>"比較結果"</h3>
                    <pre class="result-body">{move || result.get().unwrap_or_default()}</pre>
                </div>
            </Show>
        </div>
    }
}
