//! Transient notifications in the corner of the screen.

use contracts::shared::list::Notifier;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows `message` and schedules its removal.
    pub fn push(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let message = message.into();
        log::debug!("toast #{}: {}", id, message);
        self.toasts.update(|toasts| toasts.push(Toast { id, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, message: &str) {
        self.push(message);
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found");

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| service.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
