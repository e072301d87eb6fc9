//! Admin profile card plus data source settings

use feedhub_core::config::{Config, DataSource};
use leptos::prelude::*;

use crate::components::{ProfileCard, ProfileKind};
use crate::context::use_app_context;

#[component]
pub fn AdminProfilePanel() -> impl IntoView {
    view! {
        <section class="panel profile-panel">
            <ProfileCard kind=ProfileKind::Admin />
            <SettingsCard />
        </section>
    }
}

/// Switch between the local store and the REST service
#[component]
fn SettingsCard() -> impl IntoView {
    let ctx = use_app_context();
    let initial = ctx.config.get_untracked();
    let (source, set_source) = signal(initial.data_source);
    let (api_url, set_api_url) = signal(initial.api_base_url);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = Config {
            api_base_url: api_url.get().trim().trim_end_matches('/').to_string(),
            data_source: source.get(),
        };
        match ctx.apply_config(config) {
            Ok(()) => {
                set_form_error.set(None);
                ctx.success("Settings saved");
            }
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    let reset = move |_| match ctx.reset_config() {
        Ok(()) => {
            let config = ctx.config.get_untracked();
            set_source.set(config.data_source);
            set_api_url.set(config.api_base_url);
            set_form_error.set(None);
            ctx.success("Settings reset");
        }
        Err(e) => set_form_error.set(Some(e)),
    };

    view! {
        <form class="card settings-card" on:submit=save>
            <h3>"Data source"</h3>
            <label>
                "Source"
                <select
                    prop:value=move || source.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = DataSource::parse(&event_target_value(&ev)) {
                            set_source.set(parsed);
                        }
                    }
                >
                    <option value="local">"Local (this browser)"</option>
                    <option value="remote">"Remote (REST API)"</option>
                </select>
            </label>
            <label>
                "API base URL"
                <input
                    type="url"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
            </label>
            {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=reset>"Reset to defaults"</button>
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
