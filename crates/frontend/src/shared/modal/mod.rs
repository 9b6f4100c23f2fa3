use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Optional line under the title
    #[prop(into, optional)]
    description: Signal<Option<String>>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle overlay click
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{move || title.get()}</h2>
                        {move || description.get().map(|d| view! {
                            <p class="modal-description">{d}</p>
                        })}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no dialog in front of a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into)]
    confirm_label: Signal<String>,
    #[prop(into)]
    cancel_label: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal-message">{move || message.get()}</p>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {move || cancel_label.get()}
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                    {move || confirm_label.get()}
                </button>
            </div>
        </Modal>
    }
}
