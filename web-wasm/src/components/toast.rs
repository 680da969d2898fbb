//! トースト通知
//!
//! 成功/エラーの一時通知。発行後、一定時間で自動的に消える。
//! `Toaster`をAppがコンテキストに置き、各ビューが取り出して使う。

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 表示時間（ミリ秒）
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    message: String,
    kind: ToastKind,
}

/// トースト発行ハンドル
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    fn push(&self, message: String, kind: ToastKind) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts
            .update(|toasts| toasts.push(Toast { id, message, kind }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// トースト表示コンポーネント
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let toasts = toaster.toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <div class=toast.kind.class()>{toast.message}</div> }
                }
            />
        </div>
    }
}
