use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d400_summary::dto::{quick_actions, summary_cards};
use contracts::shared::i18n::Translate;
use leptos::prelude::*;

/// Landing screen: summary cards and quick-action tiles
#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || ctx.t("dashboard")}</h1>
                    <p class="header__subtitle">{move || ctx.t("welcomeDashboard")}</p>
                </div>
            </div>

            <div class="stat-card-grid">
                {summary_cards().into_iter().map(|card| {
                    let title_key = card.title_key.clone();
                    let description_key = card.description_key.clone();
                    view! {
                        <StatCard
                            label=Signal::derive(move || ctx.t(&title_key))
                            icon_name=card.icon
                            value=card.value
                            subtitle=Signal::derive(move || Some(ctx.t(&description_key)))
                        />
                    }
                }).collect_view()}
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{move || ctx.t("quickActions")}</h2>
                    <p class="card__description">{move || ctx.t("quickActionsDescription")}</p>
                </div>
                <div class="quick-actions">
                    {quick_actions().into_iter().map(|action| {
                        let title_key = action.title_key;
                        let description_key = action.description_key;
                        view! {
                            <button
                                class="quick-action"
                                on:click=move |_| ctx.open_page(AppPage::MasterData)
                            >
                                <div class="quick-action__title">{
                                    let key = title_key.clone();
                                    move || ctx.t(&key)
                                }</div>
                                <div class="quick-action__description">{
                                    let key = description_key.clone();
                                    move || ctx.t(&key)
                                }</div>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
