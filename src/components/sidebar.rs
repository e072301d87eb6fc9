//! Dashboard Sidebar
//!
//! Section navigation plus logout. The admin sidebar collapses to
//! initials and confirms logout.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// Navigation sidebar for one dashboard
///
/// `sections` are `(id, label)` pairs; `active` holds the selected id.
#[component]
pub fn Sidebar(
    #[prop(into)] title: String,
    sections: Vec<(&'static str, &'static str)>,
    #[prop(into)] active: Signal<&'static str>,
    #[prop(into)] on_select: Callback<&'static str>,
    #[prop(optional)] collapsible: bool,
    #[prop(optional)] confirm_logout: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let (collapsed, set_collapsed) = signal(false);

    let sidebar_class = move || {
        if collapsed.get() {
            "sidebar collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <Show when=move || !collapsed.get()>
                    <span class="sidebar-title">{title.clone()}</span>
                </Show>
                {collapsible.then(|| view! {
                    <button
                        class="sidebar-toggle"
                        title="Toggle sidebar"
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                })}
            </div>

            <nav class="sidebar-nav">
                {sections.into_iter().map(|(id, label)| {
                    let initial = label.chars().next().unwrap_or('?').to_string();
                    view! {
                        <button
                            class=move || if active.get() == id { "sidebar-item active" } else { "sidebar-item" }
                            title=label
                            on:click=move |_| on_select.run(id)
                        >
                            {move || if collapsed.get() { initial.clone() } else { label.to_string() }}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                {if confirm_logout {
                    view! {
                        <DeleteConfirmButton
                            label="Logout"
                            prompt="Log out?"
                            button_class="logout-btn"
                            on_confirm=move |_| ctx.sign_out()
                        />
                    }.into_any()
                } else {
                    view! {
                        <button class="logout-btn" on:click=move |_| ctx.sign_out()>"Logout"</button>
                    }.into_any()
                }}
            </div>
        </aside>
    }
}
