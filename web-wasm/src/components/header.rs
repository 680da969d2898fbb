//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"DocGPT - ドキュメント解析ツール"</h1>
        </header>
    }
}
