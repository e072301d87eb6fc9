//! Admin scratch todo list, local to this browser

use chrono::Utc;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodosPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let refresh = move || store.todos().set(ctx.store().todos().list());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.store().todos().add(&new_text.get(), Utc::now()) {
            Ok(_) => {
                set_new_text.set(String::new());
                refresh();
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };

    let toggle = move |id: String| match ctx.store().todos().toggle(&id) {
        Ok(_) => refresh(),
        Err(e) => ctx.error(e.to_string()),
    };

    let delete = move |id: String| match ctx.store().todos().delete(&id) {
        Ok(_) => refresh(),
        Err(e) => ctx.error(e.to_string()),
    };

    let clear_completed = move |_| match ctx.store().todos().clear_completed() {
        Ok(removed) => {
            ctx.success(format!("Cleared {removed} completed"));
            refresh();
        }
        Err(e) => ctx.error(e.to_string()),
    };

    let remaining = move || store.todos().read().iter().filter(|t| !t.completed).count();

    view! {
        <section class="panel todos-panel">
            <form class="inline-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Add a todo…"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Add"</button>
            </form>
            <ul class="todo-list">
                <For
                    each=move || store.todos().get()
                    key=|t| (t.id.clone(), t.completed)
                    children=move |todo| {
                        let toggle_id = todo.id.clone();
                        let delete_id = todo.id.clone();
                        view! {
                            <li class="todo-item" class:completed=todo.completed>
                                <input
                                    type="checkbox"
                                    checked=todo.completed
                                    on:change=move |_| toggle(toggle_id.clone())
                                />
                                <span class="todo-text">{todo.text.clone()}</span>
                                <DeleteConfirmButton
                                    label="×"
                                    button_class="todo-delete-btn"
                                    on_confirm=move |_| delete(delete_id.clone())
                                />
                            </li>
                        }
                    }
                />
            </ul>
            <div class="todo-footer">
                <span>{move || format!("{} remaining", remaining())}</span>
                <button class="cancel-btn" on:click=clear_completed>"Clear completed"</button>
            </div>
        </section>
    }
}
