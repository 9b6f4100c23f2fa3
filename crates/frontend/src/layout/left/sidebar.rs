//! Sidebar navigation between the console screens

use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::icons::icon;
use contracts::shared::i18n::Translate;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {AppPage::all().into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active_page.get() == page
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_page(page)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span>{move || ctx.t(page.label_key())}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
