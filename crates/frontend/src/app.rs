use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::apply_theme;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::default_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = default_config();
    log::info!(
        "console starting: page_size={}, language={}",
        config.ui.page_size,
        config.ui.default_language.as_str()
    );

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(&config);
    provide_context(ctx);

    // Notifications are shared by every screen
    provide_context(ToastService::new());

    Effect::new(move |_| {
        apply_theme(ctx.settings.with(|s| s.theme));
    });

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}
