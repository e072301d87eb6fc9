//! Profile Card Component
//!
//! View/edit card for the admin profile or the current user's profile.
//! Saving detects edits made in another tab meanwhile.

use feedhub_core::domain::Profile;
use feedhub_core::repository::ProfileRepository;
use feedhub_core::storage::Snapshot;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::local_storage::{browser_store, LocalStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Admin,
    User,
}

impl ProfileKind {
    fn repository(self) -> ProfileRepository<LocalStorage> {
        let store = browser_store();
        match self {
            ProfileKind::Admin => store.admin_profile(),
            ProfileKind::User => store.user_profile(),
        }
    }
}

#[component]
pub fn ProfileCard(kind: ProfileKind) -> impl IntoView {
    let ctx = use_app_context();

    let snapshot = StoredValue::new(kind.repository().edit());
    let (profile, set_profile) = signal(snapshot.get_value().value);
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let reload_from_storage = move || {
        let fresh: Snapshot<Profile> = kind.repository().edit();
        set_profile.set(fresh.value.clone());
        snapshot.set_value(fresh);
    };

    let start_edit = move |_| {
        reload_from_storage();
        let current = profile.get_untracked();
        set_name.set(current.name);
        set_email.set(current.email);
        set_form_error.set(None);
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = Profile::new(name.get(), email.get());
        let result = snapshot.with_value(|snap| kind.repository().save(snap, &draft));
        match result {
            Ok(saved) => {
                log::info!("[PROFILE] saved {:?} profile", kind);
                reload_from_storage();
                set_profile.set(saved);
                set_editing.set(false);
                ctx.success("Profile saved");
            }
            Err(e) if e.is_conflict() => {
                reload_from_storage();
                set_form_error.set(Some(
                    "Profile was changed in another tab; reloaded the latest version. Save again to overwrite.".to_string(),
                ));
            }
            Err(e) => set_form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="card profile-card">
            {move || if editing.get() {
                view! {
                    <form class="profile-form" on:submit=save>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="form-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                            <button type="submit" class="primary-btn">"Save"</button>
                        </div>
                    </form>
                }.into_any()
            } else {
                view! {
                    <div class="profile-view">
                        <div class="profile-avatar">
                            {move || profile.get().name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                        </div>
                        <div class="profile-name">{move || profile.get().name}</div>
                        <div class="profile-email">{move || profile.get().email}</div>
                        <button class="primary-btn" on:click=start_edit>"Edit profile"</button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
