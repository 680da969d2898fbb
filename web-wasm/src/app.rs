//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{
    compare::CompareView,
    encode_decode::EncodeDecodeView,
    header::Header,
    hero::Hero,
    qa::QaView,
    summarize::SummarizeView,
    toast::{ToastStack, Toaster},
    translate::TranslateView,
    voice_search::VoiceSearchView,
};

/// 機能タブ
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Compare,
    EncodeDecode,
    Translate,
    Qa,
    Summarize,
    VoiceSearch,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Compare,
        Tab::EncodeDecode,
        Tab::Translate,
        Tab::Qa,
        Tab::Summarize,
        Tab::VoiceSearch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Compare => "ファイル比較",
            Tab::EncodeDecode => "エンコード/デコード",
            Tab::Translate => "翻訳",
            Tab::Qa => "Q&A",
            Tab::Summarize => "要約",
            Tab::VoiceSearch => "音声検索",
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let toaster = Toaster::new();
    provide_context(toaster);

    let (active_tab, set_active_tab) = signal(Tab::default());

    view! {
        <div class="container">
            <Header />
            <Hero />

            <nav class="tab-bar">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab {
                                        "tab-button active"
                                    } else {
                                        "tab-button"
                                    }
                                }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="view-container">
                {move || match active_tab.get() {
                    Tab::Compare => view! { <CompareView /> }.into_any(),
                    Tab::EncodeDecode => view! { <EncodeDecodeView /> }.into_any(),
                    Tab::Translate => view! { <TranslateView /> }.into_any(),
                    Tab::Qa => view! { <QaView /> }.into_any(),
                    Tab::Summarize => view! { <SummarizeView /> }.into_any(),
                    Tab::VoiceSearch => view! { <VoiceSearchView /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
