use leptos::prelude::*;

use crate::components::{ProfileCard, ProfileKind};

#[component]
pub fn UserProfilePanel() -> impl IntoView {
    view! {
        <section class="panel profile-panel">
            <ProfileCard kind=ProfileKind::User />
        </section>
    }
}
