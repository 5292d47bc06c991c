//! Transient notifications ("toasts")
//!
//! `ToastService` is provided through context by `App`; `ToastHost` renders the
//! current stack. Toasts are not persisted and disappear after `TOAST_TTL_MS`.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};
use wasm_bindgen_futures::spawn_local;

const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification to show, independent of how it is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ToastEntry {
    id: u64,
    message: ToastMessage,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Push a toast and schedule its removal
    pub fn show(&self, message: ToastMessage) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(ToastEntry { id, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let intent = match entry.message.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <div class="toast">
                            <MessageBar intent=intent>
                                <span class="toast__text">{entry.message.text}</span>
                                <button
                                    class="button button--icon toast__close"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
