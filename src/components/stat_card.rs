//! Stat tiles and short "latest" lists for the overview panels

use leptos::prelude::*;

/// One row of a [`RecentList`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub id: String,
    pub label: String,
    pub meta: String,
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn RecentList(
    #[prop(into)] title: String,
    #[prop(into)] items: Signal<Vec<RecentEntry>>,
) -> impl IntoView {
    view! {
        <div class="card recent-list">
            <h3>{title}</h3>
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="empty">"Nothing yet"</p> }
            >
                <ul>
                    <For
                        each=move || items.get()
                        key=|entry| entry.id.clone()
                        children=|entry| view! {
                            <li>
                                <span class="recent-label">{entry.label}</span>
                                <span class="recent-meta">{entry.meta}</span>
                            </li>
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
