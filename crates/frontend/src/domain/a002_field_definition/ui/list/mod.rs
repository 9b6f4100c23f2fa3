//! Field management screen: custom field definitions with search and paging.

use crate::domain::a002_field_definition::ui::details::FieldDefinitionDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::ToastService;
use contracts::domain::a002_field_definition::aggregate::{
    seed_drafts, FieldDefinition, FieldDefinitionForm, FieldType,
};
use contracts::domain::common::RecordId;
use contracts::shared::i18n::Translate;
use contracts::shared::list::{CrudController, DialogState, RecordStore};
use leptos::prelude::*;

fn blank_form() -> FieldDefinitionForm {
    FieldDefinitionForm {
        field_type: FieldType::default().as_str().to_string(),
        ..FieldDefinitionForm::default()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FieldDefinitionList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let controller = RwSignal::new(CrudController::new(
        RecordStore::<FieldDefinition>::seeded(seed_drafts()),
        ctx.page_size,
    ));
    let list = Memo::new(move |_| controller.with(|c| c.view()));
    let dialog = Memo::new(move |_| controller.with(|c| c.dialog()));

    let form = RwSignal::new(blank_form());
    let form_error = RwSignal::new(None::<&'static str>);

    let open_create = move |_| {
        let mut opened = false;
        controller.update(|c| opened = c.open_create());
        if opened {
            form.set(blank_form());
            form_error.set(None);
        }
    };

    let open_edit = move |id: RecordId| {
        let mut opened = false;
        controller.update(|c| opened = c.open_edit(id));
        if opened {
            form.set(controller.with_untracked(|c| c.edit_form()).unwrap_or_else(blank_form));
            form_error.set(None);
        }
    };

    let open_delete = move |id: RecordId| {
        controller.update(|c| {
            c.open_delete(id);
        });
    };

    let cancel = Callback::new(move |_| controller.update(|c| c.cancel()));

    let submit = Callback::new(move |_| {
        let draft = form.get_untracked();
        let language = ctx.language_untracked();
        let mut result = None;
        controller.update(|c| result = Some(c.submit(&draft, &language, &toasts)));
        if let Some(Err(e)) = result {
            form_error.set(Some(e.message_key()));
        } else {
            form_error.set(None);
        }
    });

    let confirm_delete = Callback::new(move |_| {
        let language = ctx.language_untracked();
        controller.update(|c| {
            c.confirm_delete(&language, &toasts);
        });
    });

    let details = move |is_edit: bool| {
        view! {
            <FieldDefinitionDetails
                is_edit=is_edit
                form=form
                error=form_error
                on_submit=submit
                on_cancel=cancel
            />
        }
        .into_any()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || ctx.t("fieldManagement")}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=open_create>
                        {icon("plus")}
                        {move || ctx.t("create")}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || list.with(|l| l.query.clone()))
                    on_change=Callback::new(move |query: String| controller.update(|c| c.set_query(query)))
                    placeholder=Signal::derive(move || ctx.t("search"))
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || ctx.t("name")}</th>
                            <th class="table__header-cell">{move || ctx.t("type")}</th>
                            <th class="table__header-cell">{move || ctx.t("isRequired")}</th>
                            <th class="table__header-cell">{move || ctx.t("defaultValue")}</th>
                            <th class="table__header-cell table__header-cell--actions">{move || ctx.t("actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view_model = list.get();
                            if view_model.items.is_empty() {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            {ctx.t("noResults")}
                                        </td>
                                    </tr>
                                }.into_any();
                            }

                            let query = view_model.query.clone();
                            view_model.items.into_iter().map(|field| {
                                let id = field.id;
                                let default_value = if field.default_value.is_empty() {
                                    "-".to_string()
                                } else {
                                    field.default_value.clone()
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&field.name, &query)}</td>
                                        <td class="table__cell">
                                            <span class="badge badge--neutral">
                                                {highlight_matches(field.field_type.as_str(), &query)}
                                            </span>
                                        </td>
                                        <td class="table__cell">
                                            {ctx.t(if field.is_required { "yes" } else { "no" })}
                                        </td>
                                        <td class="table__cell">{default_value}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title=ctx.t("edit")
                                                on:click=move |_| open_edit(id)
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title=ctx.t("delete")
                                                on:click=move |_| open_delete(id)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || list.with(|l| l.show_pagination)>
                <PaginationControls
                    current_page=Signal::derive(move || list.with(|l| l.current_page))
                    total_pages=Signal::derive(move || list.with(|l| l.total_pages))
                    markers=Signal::derive(move || list.with(|l| l.markers.clone()))
                    previous_label=Signal::derive(move || ctx.t("previous"))
                    next_label=Signal::derive(move || ctx.t("next"))
                    on_page_change=Callback::new(move |page| controller.update(|c| c.set_page(page)))
                    on_prev=Callback::new(move |_| controller.update(|c| c.prev_page()))
                    on_next=Callback::new(move |_| controller.update(|c| c.next_page()))
                />
            </Show>

            {move || match dialog.get() {
                DialogState::CreateDialogOpen => details(false),
                DialogState::EditDialogOpen(_) => details(true),
                DialogState::DeleteConfirmOpen(_) => view! {
                    <ConfirmDialog
                        title=Signal::derive(move || ctx.t("delete"))
                        message=Signal::derive(move || {
                            let target = controller
                                .with(|c| c.dialog_target().map(|r| r.name.clone()))
                                .unwrap_or_default();
                            format!("{} \"{}\" {}", ctx.t("deleteConfirm"), target, ctx.t("deleteIrreversible"))
                        })
                        confirm_label=Signal::derive(move || ctx.t("delete"))
                        cancel_label=Signal::derive(move || ctx.t("cancel"))
                        on_confirm=confirm_delete
                        on_cancel=cancel
                    />
                }.into_any(),
                DialogState::Browsing => ().into_any(),
            }}
        </div>
    }
}
