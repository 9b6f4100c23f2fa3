//! Preferences screen: appearance, language, notifications, system switches.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::ToastService;
use contracts::shared::i18n::{Language, Translate};
use contracts::shared::settings::Preference;
use leptos::prelude::*;

#[component]
fn SwitchRow(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="settings-row">
            <div class="settings-row__text">
                <div class="settings-row__label">{move || label.get()}</div>
                <div class="settings-row__description">{move || description.get()}</div>
            </div>
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                <span class="switch__slider"></span>
            </label>
        </div>
    }
}

#[component]
fn PreferenceSwitch(preference: Preference) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <SwitchRow
            label=Signal::derive(move || ctx.t(preference.label_key()))
            description=Signal::derive(move || ctx.t(preference.description_key()))
            checked=Signal::derive(move || ctx.settings.with(|s| s.get(preference)))
            on_toggle=Callback::new(move |enabled| {
                ctx.settings.update(|s| s.set(preference, enabled));
            })
        />
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let on_save = move |_| {
        let settings = ctx.settings.get_untracked();
        log::info!("settings saved: {:?}", settings);
        toasts.push(ctx.t("settingsSaved"));
    };

    let section = move |title_key: &'static str, description_key: &'static str| {
        view! {
            <div class="card__header">
                <h2 class="card__title">{move || ctx.t(title_key)}</h2>
                <p class="card__description">{move || ctx.t(description_key)}</p>
            </div>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || ctx.t("settings")}</h1>
                    <p class="header__subtitle">{move || ctx.t("settingsDescription")}</p>
                </div>
            </div>

            <div class="card">
                {section("appearance", "appearanceDescription")}
                <SwitchRow
                    label=Signal::derive(move || ctx.t("darkMode"))
                    description=Signal::derive(move || ctx.t("darkModeDescription"))
                    checked=Signal::derive(move || ctx.settings.with(|s| s.is_dark()))
                    on_toggle=Callback::new(move |dark: bool| {
                        if dark != ctx.settings.with_untracked(|s| s.is_dark()) {
                            ctx.toggle_theme();
                        }
                    })
                />
            </div>

            <div class="card">
                {section("language", "languageDescription")}
                <div class="language-grid">
                    {Language::all().into_iter().map(|language| {
                        view! {
                            <button
                                class="language-option"
                                class:language-option--active=move || ctx.language() == language
                                on:click=move |_| ctx.set_language(language)
                            >
                                <span class="language-option__flag">{language.flag()}</span>
                                <span>{language.native_name()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
                <p class="settings-row__description">
                    {move || format!("{}: {}", ctx.t("currentLanguage"), ctx.language().native_name())}
                </p>
            </div>

            <div class="card">
                {section("notifications", "notificationsDescription")}
                <PreferenceSwitch preference=Preference::EmailNotifications />
                <PreferenceSwitch preference=Preference::PushNotifications />
            </div>

            <div class="card">
                {section("system", "systemDescription")}
                <PreferenceSwitch preference=Preference::AutomaticUpdates />
                <PreferenceSwitch preference=Preference::Analytics />
            </div>

            <div class="header__actions">
                <button class="button button--primary" on:click=on_save>
                    {move || ctx.t("save")}
                </button>
            </div>
        </div>
    }
}
