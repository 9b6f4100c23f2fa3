//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and application title
//! - Language switcher
//! - Theme toggle
//! - Signed-in user and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::shared::i18n::{Language, Translate};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let is_dark = move || ctx.settings.with(|s| s.is_dark());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                >
                    {move || if ctx.left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || ctx.t("appTitle")}</span>
            </div>

            <div class="top-header__actions">
                // Language switcher
                <div class="top-header__language">
                    {icon("globe")}
                    <select
                        class="top-header__select"
                        title=move || ctx.t("language")
                        prop:value=move || ctx.language().as_str()
                        on:change=move |ev| {
                            if let Some(language) = Language::parse(&event_target_value(&ev)) {
                                ctx.set_language(language);
                            }
                        }
                    >
                        {Language::all().into_iter().map(|language| {
                            view! {
                                <option
                                    value=language.as_str()
                                    selected=move || ctx.language() == language
                                >
                                    {format!("{} {}", language.flag(), language.native_name())}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                // Theme toggle
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_theme()
                    title=move || ctx.t("darkMode")
                >
                    {move || if is_dark() { icon("sun") } else { icon("moon") }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth.user_email().unwrap_or_default()}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| auth.logout()
                    title=move || ctx.t("logout")
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
