use crate::dashboards::d400_summary::ui::dashboard::SummaryDashboard;
use crate::domain::a001_master_data::ui::list::MasterDataList;
use crate::domain::a002_field_definition::ui::list::FieldDefinitionList;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active_page.get() {
                        AppPage::Dashboard => view! { <SummaryDashboard /> }.into_any(),
                        AppPage::MasterData => view! { <MasterDataList /> }.into_any(),
                        AppPage::FieldManagement => view! { <FieldDefinitionList /> }.into_any(),
                        AppPage::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
