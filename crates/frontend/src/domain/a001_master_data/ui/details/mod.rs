//! Create / edit dialog for a master data item

use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use contracts::domain::a001_master_data::aggregate::{ItemStatus, MasterDataForm};
use contracts::shared::i18n::Translate;
use leptos::prelude::*;

#[component]
pub fn MasterDataDetails(
    /// Edit dialog when true, create dialog otherwise
    is_edit: bool,
    form: RwSignal<MasterDataForm>,
    /// Translation key of the last validation error
    #[prop(into)]
    error: Signal<Option<&'static str>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let title = Signal::derive(move || {
        let verb = if is_edit { ctx.t("edit") } else { ctx.t("create") };
        format!("{} {}", verb, ctx.t("masterData"))
    });
    let description = Signal::derive(move || {
        Some(ctx.t(if is_edit {
            "editMasterDataDescription"
        } else {
            "createMasterDataDescription"
        }))
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <Modal title=title description=description on_close=on_cancel>
            <form class="details-form" on:submit=handle_submit>
                {move || error.get().map(|key| view! {
                    <div class="error-message">{ctx.t(key)}</div>
                })}

                <div class="form-group">
                    <label for="md-name">{move || ctx.t("name")}</label>
                    <input
                        type="text"
                        id="md-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="md-description">{move || ctx.t("description")}</label>
                    <textarea
                        id="md-description"
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="md-status">{move || ctx.t("status")}</label>
                    <select
                        id="md-status"
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        {ItemStatus::all().into_iter().map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || form.with(|f| f.status == status.as_str())
                            >
                                {move || ctx.t(status.as_str())}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        {move || ctx.t("cancel")}
                    </button>
                    <button type="submit" class="button button--primary">
                        {move || ctx.t("save")}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
