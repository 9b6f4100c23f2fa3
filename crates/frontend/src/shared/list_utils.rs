/// UI helpers for searchable lists
use leptos::prelude::*;

/// Highlights case-insensitive occurrences of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // lowercasing may shift byte offsets for some scripts; fall back to plain text
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark>
        }.into_any());
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button. Every keystroke is forwarded as is.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Signal<String>,
) -> impl IntoView {
    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_change.run(String::new())
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
