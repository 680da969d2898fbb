//! ヒーローセクションと機能カード

use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📑",
        title: "ファイル比較",
        description: "2つの文書の追加・削除・変更箇所を差分として抽出します。",
    },
    Feature {
        icon: "🔐",
        title: "エンコード/デコード",
        description: "Base64・URL・HTMLエンティティ・モールス符号の相互変換。",
    },
    Feature {
        icon: "🌐",
        title: "翻訳",
        description: "文書をそのまま多言語へ翻訳します。",
    },
    Feature {
        icon: "❓",
        title: "Q&A",
        description: "文書の内容について質問し、AIの回答を得られます。",
    },
    Feature {
        icon: "📝",
        title: "要約",
        description: "文書の要点を指定した文数にまとめます。",
    },
    Feature {
        icon: "🎤",
        title: "音声検索",
        description: "音声のキーワードで文書内を検索します。",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"ドキュメント解析プラットフォーム"</h2>
            <p class="text-muted">
                "文書をアップロードするだけで、比較・変換・翻訳・Q&A・要約・音声検索が行えます。処理はすべてDocGPTバックエンドが担当します。"
            </p>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <FeatureCard
                                icon=feature.icon
                                title=feature.title
                                description=feature.description
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p class="text-muted">{description}</p>
        </div>
    }
}
