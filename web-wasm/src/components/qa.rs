//! Q&Aビュー
//!
//! 質問リストは追加・インデックス削除のみ。重複は許し、
//! 表示順がそのまま送信順になる。

use docgpt_common::QaPair;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;

#[component]
pub fn QaView() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let (document_file, set_document_file) = signal_local(None::<File>);
    let (document_name, set_document_name) = signal(None::<String>);
    let (question, set_question) = signal(String::new());
    let (questions, set_questions) = signal(Vec::<String>::new());
    let (answers, set_answers) = signal(Vec::<QaPair>::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_file = move |file: File| {
        set_document_name.set(Some(file.name()));
        set_document_file.set(Some(file));
    };

    let add_question = move || {
        let text = question.get_untracked();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            toaster.error("質問を入力してください");
            return;
        }
        set_questions.update(|questions| questions.push(trimmed.to_string()));
        set_question.set(String::new());
    };

    let on_ask = move |_| {
        let Some(file) = document_file.get_untracked() else {
            toaster.error("文書をアップロードしてください");
            return;
        };
        let submitted = questions.get_untracked();
        if submitted.is_empty() {
            toaster.error("質問を1件以上追加してください");
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::ask_questions(&file, &submitted).await {
                Ok(response) => {
                    set_answers.set(response.answers);
                    toaster.success("回答を取得しました");
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="view">
            <h2>"文書Q&A"</h2>
            <p class="text-muted">
                "文書をアップロードして質問すると、内容に基づいた回答が得られます。"
            </p>

            <UploadArea selected=document_name label="Q&A対象の文書をアップロード" on_file=on_file />

            <div class="form-group">
                <label for="question-input">"質問"</label>
                <div class="question-input-row">
                    <input
                        type="text"
                        id="question-input"
                        placeholder="質問を入力..."
                        prop:value=move || question.get()
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_question();
                            }
                        }
                    />
                    <button class="btn btn-primary" on:click=move |_| add_question()>
                        "追加"
                    </button>
                </div>
            </div>

            <Show when=move || !questions.get().is_empty()>
                <div class="question-list">
                    <h3>"質問リスト"</h3>
                    <ul>
                        <For
                            each=move || { questions.get().into_iter().enumerate().collect::<Vec<_>>() }
                            key=|(index, text)| (*index, text.clone())
                            children=move |(index, text)| {
                                view! {
                                    <li class="question-item">
                                        <span>{text}</span>
                                        <button
                                            class="btn-remove"
                                            on:click=move |_| {
                                                set_questions
                                                    .update(|questions| {
                                                        if index < questions.len() {
                                                            questions.remove(index);
                                                        }
                                                    });
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || {
                        is_loading.get() || document_name.get().is_none()
                            || questions.get().is_empty()
                    }
                    on:click=on_ask
                >
                    {move || if is_loading.get() { "処理中..." } else { "回答を取得" }}
                </button>
            </div>

            <Show when=move || !answers.get().is_empty()>
                <div class="result-panel">
                    <h3>"回答"</h3>
                    <For
                        each=move || { answers.get().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(index, _)| *index
                        children=move |(_, pair)| {
                            view! {
                                <div class="qa-card">
                                    <p class="text-muted">"質問:"</p>
                                    <p class="qa-question">{pair.question}</p>
                                    <p class="text-muted">"回答:"</p>
                                    <p class="qa-answer">{pair.answer}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
