//! Admin category management: add, rename in place, delete
//!
//! An empty list is reseeded with the defaults on the next admin load.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoriesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());
    // (category id, draft name) while renaming
    let renaming = RwSignal::new(None::<(String, String)>);

    let refresh = move || store.categories().set(ctx.store().categories().list());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.store().categories().add(&new_name.get(), Utc::now()) {
            Ok(category) => {
                ctx.success(format!("Added {}", category.name));
                set_new_name.set(String::new());
                refresh();
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };

    let save_rename = move || {
        let Some((id, name)) = renaming.get_untracked() else {
            return;
        };
        match ctx.store().categories().rename(&id, &name) {
            Ok(_) => {
                renaming.set(None);
                refresh();
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };

    let delete = move |id: String| match ctx.store().categories().delete(&id) {
        Ok(category) => {
            refresh();
            if store.categories().read_untracked().is_empty() {
                ctx.success(format!(
                    "Deleted {}. The default categories come back on the next load",
                    category.name
                ));
            } else {
                ctx.success(format!("Deleted {}", category.name));
            }
        }
        Err(e) => ctx.error(e.to_string()),
    };

    view! {
        <section class="panel categories-panel">
            <form class="inline-form" on:submit=add>
                <input
                    type="text"
                    placeholder="New category"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Add"</button>
            </form>
            <p class="hint">"Removing every category restores the six defaults on the next load."</p>
            <ul class="category-list">
                <For
                    each=move || store.categories().get()
                    key=|c| (c.id.clone(), c.name.clone())
                    children=move |category| {
                        let id = category.id.clone();
                        let is_renaming = {
                            let id = id.clone();
                            move || renaming.with(|r| r.as_ref().is_some_and(|(rid, _)| *rid == id))
                        };
                        view! {
                            <li class="category-row">
                                <Show
                                    when=is_renaming
                                    fallback={
                                        let id = id.clone();
                                        let name = category.name.clone();
                                        move || {
                                            let edit_id = id.clone();
                                            let edit_name = name.clone();
                                            let delete_id = id.clone();
                                            view! {
                                                <span class="category-name">{name.clone()}</span>
                                                <button on:click=move |_| {
                                                    renaming.set(Some((edit_id.clone(), edit_name.clone())))
                                                }>
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| delete(delete_id.clone()) />
                                            }
                                        }
                                    }
                                >
                                    <input
                                        type="text"
                                        prop:value=move || renaming.get().map(|(_, name)| name).unwrap_or_default()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            renaming.update(|r| {
                                                if let Some((_, name)) = r {
                                                    *name = value;
                                                }
                                            });
                                        }
                                    />
                                    <button class="primary-btn" on:click=move |_| save_rename()>"Save"</button>
                                    <button class="cancel-btn" on:click=move |_| renaming.set(None)>"Cancel"</button>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
