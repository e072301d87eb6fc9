//! Horizontal bar chart, widths relative to the largest row

use feedhub_core::analytics::bar_percent;
use leptos::prelude::*;

#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] rows: Signal<Vec<(String, usize)>>,
) -> impl IntoView {
    let max = move || rows.get().iter().map(|(_, count)| *count).max().unwrap_or(0);

    view! {
        <div class="card bar-chart">
            <h3>{title}</h3>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="empty">"No data"</p> }
            >
                {move || {
                    let max = max();
                    rows.get().into_iter().map(|(label, count)| {
                        let width = format!("width: {}%", bar_percent(count, max));
                        view! {
                            <div class="bar-row">
                                <span class="bar-label">{label}</span>
                                <span class="bar-track">
                                    <span class="bar-fill" style=width></span>
                                </span>
                                <span class="bar-count">{count}</span>
                            </div>
                        }
                    }).collect_view()
                }}
            </Show>
        </div>
    }
}
