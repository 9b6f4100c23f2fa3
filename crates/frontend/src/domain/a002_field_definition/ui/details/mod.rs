use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use contracts::domain::a002_field_definition::aggregate::{FieldDefinitionForm, FieldType};
use contracts::shared::i18n::Translate;
use leptos::prelude::*;

#[component]
pub fn FieldDefinitionDetails(
    is_edit: bool,
    form: RwSignal<FieldDefinitionForm>,
    #[prop(into)]
    error: Signal<Option<&'static str>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let title = Signal::derive(move || {
        let verb = if is_edit { ctx.t("edit") } else { ctx.t("create") };
        format!("{} {}", verb, ctx.t("fieldManagement"))
    });
    let description = Signal::derive(move || {
        Some(ctx.t(if is_edit {
            "editFieldDescription"
        } else {
            "createFieldDescription"
        }))
    });

    view! {
        <Modal title=title description=description on_close=on_cancel>
            <form
                class="details-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {move || error.get().map(|key| view! {
                    <div class="error-message">{ctx.t(key)}</div>
                })}

                <div class="form-group">
                    <label for="fd-name">{move || ctx.t("name")}</label>
                    <input
                        type="text"
                        id="fd-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="fd-type">{move || ctx.t("type")}</label>
                    <select
                        id="fd-type"
                        prop:value=move || form.with(|f| f.field_type.clone())
                        on:change=move |ev| form.update(|f| f.field_type = event_target_value(&ev))
                    >
                        {FieldType::ALL.into_iter().map(|field_type| view! {
                            <option
                                value=field_type.as_str()
                                selected=move || form.with(|f| f.field_type == field_type.as_str())
                            >
                                {field_type.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="fd-required"
                        prop:checked=move || form.with(|f| f.is_required)
                        on:change=move |ev| form.update(|f| f.is_required = event_target_checked(&ev))
                    />
                    <label for="fd-required">{move || ctx.t("isRequired")}</label>
                </div>

                <div class="form-group">
                    <label for="fd-default">{move || ctx.t("defaultValue")}</label>
                    <input
                        type="text"
                        id="fd-default"
                        prop:value=move || form.with(|f| f.default_value.clone())
                        on:input=move |ev| form.update(|f| f.default_value = event_target_value(&ev))
                    />
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
