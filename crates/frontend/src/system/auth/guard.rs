use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;

/// Component that requires a minimum role
/// Shows a spinner until the profile is known, then a denial if the role is missing
#[component]
pub fn RequireRole(required: Role, children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.has_role(required))
            fallback=move || {
                view! {
                    {move || {
                        if auth_state.with(|s| s.checked) {
                            view! {
                                <div class="access-denied">
                                    {format!(
                                        "Access denied. {} privileges required.",
                                        required.display_name(),
                                    )}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <Spinner /> }.into_any()
                        }
                    }}
                }
            }
        >
            {children()}
        </Show>
    }
}
