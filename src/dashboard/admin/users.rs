//! Admin user management: block/unblock and delete
//!
//! The signed-in account gets no actions on its own row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_remove_user, store_update_user, use_app_store, AppStateStoreFields};

#[component]
pub fn UsersPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let toggle_blocked = move |id: String| {
        spawn_local(async move {
            match ctx.service().toggle_user_blocked(&id).await {
                Ok(user) => {
                    ctx.success(format!("{} is now {}", user.name, user.status_label()));
                    store_update_user(&store, user);
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let delete_user = move |id: String| {
        spawn_local(async move {
            match ctx.service().delete_user(&id).await {
                Ok(()) => {
                    store_remove_user(&store, &id);
                    ctx.success("User deleted");
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    view! {
        <section class="panel users-panel">
            <Show
                when=move || !store.users().read().is_empty()
                fallback=|| view! { <p class="empty">"No users registered yet"</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.users().get()
                            key=|user| (user.id.clone(), user.blocked)
                            children=move |user| {
                                let id = user.id.clone();
                                let delete_id = user.id.clone();
                                let blocked = user.blocked;
                                let is_self = ctx.session.with_untracked(|session| {
                                    session.as_ref().and_then(|s| s.user_id.as_deref())
                                        == Some(user.id.as_str())
                                });
                                view! {
                                    <tr class:blocked=blocked>
                                        <td>
                                            {user.name.clone()}
                                            {is_self.then(|| view! { <span class="you-tag">" (you)"</span> })}
                                        </td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{user.status_label()}</td>
                                        <td class="row-actions">
                                            <Show when=move || ctx.capabilities().manage_users && !is_self>
                                                <button on:click={
                                                    let id = id.clone();
                                                    move |_| toggle_blocked(id.clone())
                                                }>
                                                    {if blocked { "Unblock" } else { "Block" }}
                                                </button>
                                                <DeleteConfirmButton
                                                    on_confirm={
                                                        let id = delete_id.clone();
                                                        move |_| delete_user(id.clone())
                                                    }
                                                />
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
