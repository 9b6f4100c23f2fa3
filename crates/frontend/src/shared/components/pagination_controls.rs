use crate::shared::icons::icon;
use contracts::shared::list::PageMarker;
use leptos::prelude::*;

/// Previous / numbered / next page buttons under a list
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page buttons and gaps to render
    #[prop(into)]
    markers: Signal<Vec<PageMarker>>,

    #[prop(into)]
    previous_label: Signal<String>,

    #[prop(into)]
    next_label: Signal<String>,

    /// Callback when a numbered page is picked
    on_page_change: Callback<usize>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
            >
                {icon("chevron-left")}
                <span>{move || previous_label.get()}</span>
            </button>

            {move || markers.get().into_iter().map(|marker| match marker {
                PageMarker::Page(page) => view! {
                    <button
                        class="pagination-btn"
                        class:pagination-btn--active=move || current_page.get() == page
                        on:click=move |_| on_page_change.run(page)
                    >
                        {page.to_string()}
                    </button>
                }.into_any(),
                PageMarker::Ellipsis => view! {
                    <span class="pagination-ellipsis">"…"</span>
                }.into_any(),
            }).collect_view()}

            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
            >
                <span>{move || next_label.get()}</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
