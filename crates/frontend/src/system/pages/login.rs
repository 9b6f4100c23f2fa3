use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;
use contracts::shared::i18n::Translate;
use contracts::system::auth::Credentials;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // translation key of the last error, rendered in the current language
    let (error_key, set_error_key) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match auth.login(&credentials) {
            Ok(()) => set_error_key.set(None),
            Err(e) => {
                log::debug!("login rejected: {}", e);
                set_error_key.set(Some(e.message_key()));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{move || ctx.t("welcomeBack")}</h1>
                <h2>{move || ctx.t("pleaseSignIn")}</h2>

                <Show when=move || error_key.get().is_some()>
                    <div class="error-message">
                        {move || error_key.get().map(|key| ctx.t(key)).unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">{move || ctx.t("email")}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || ctx.t("password")}</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        {move || ctx.t("login")}
                    </button>
                </form>
            </div>
        </div>
    }
}
