use crate::domain::a001_master_data::ui::details::MasterDataDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::ToastService;
use contracts::domain::a001_master_data::aggregate::{
    seed_drafts, ItemStatus, MasterDataForm, MasterDataItem,
};
use contracts::domain::common::RecordId;
use contracts::shared::i18n::Translate;
use contracts::shared::list::{CrudController, DialogState, RecordStore};
use leptos::prelude::*;

fn blank_form() -> MasterDataForm {
    MasterDataForm {
        status: ItemStatus::default().as_str().to_string(),
        ..MasterDataForm::default()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MasterDataList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let controller = RwSignal::new(CrudController::new(
        RecordStore::<MasterDataItem>::seeded(seed_drafts()),
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
        match result {
            Some(Err(e)) => form_error.set(Some(e.message_key())),
            Some(Ok(outcome)) => {
                log::debug!("master data submit: {:?}", outcome);
                form_error.set(None);
            }
            None => {}
        }
    });

    let confirm_delete = Callback::new(move |_| {
        let language = ctx.language_untracked();
        controller.update(|c| {
            c.confirm_delete(&language, &toasts);
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || ctx.t("masterData")}</h1>
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
                            <th class="table__header-cell">{move || ctx.t("description")}</th>
                            <th class="table__header-cell">{move || ctx.t("status")}</th>
                            <th class="table__header-cell table__header-cell--actions">{move || ctx.t("actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view_model = list.get();
                            if view_model.items.is_empty() {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="4">
                                            {ctx.t("noResults")}
                                        </td>
                                    </tr>
                                }.into_any();
                            }

                            let query = view_model.query.clone();
                            view_model.items.into_iter().map(|item| {
                                let id = item.id;
                                let status_class = match item.status {
                                    ItemStatus::Active => "badge badge--success",
                                    ItemStatus::Inactive => "badge badge--neutral",
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&item.name, &query)}</td>
                                        <td class="table__cell">{highlight_matches(&item.description, &query)}</td>
                                        <td class="table__cell">
                                            <span class=status_class>{ctx.t(item.status.as_str())}</span>
                                        </td>
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
                DialogState::CreateDialogOpen => view! {
                    <MasterDataDetails
                        is_edit=false
                        form=form
                        error=form_error
                        on_submit=submit
                        on_cancel=cancel
                    />
                }.into_any(),
                DialogState::EditDialogOpen(_) => view! {
                    <MasterDataDetails
                        is_edit=true
                        form=form
                        error=form_error
                        on_submit=submit
                        on_cancel=cancel
                    />
                }.into_any(),
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
