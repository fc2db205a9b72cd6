use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
    /// Profile request finished, successfully or not
    pub checked: bool,
}

impl AuthState {
    pub fn has_role(&self, required: Role) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.has_role(required))
            .unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Load the signed-in user once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let user_info = match api::get_current_user().await {
                Ok(user) => {
                    log::debug!(
                        "auth: signed in as '{}' ({})",
                        user.user_name,
                        user.role.display_name()
                    );
                    Some(user)
                }
                Err(e) => {
                    log::info!("auth: no active session: {}", e);
                    None
                }
            };
            set_auth_state.set(AuthState {
                user_info,
                checked: true,
            });
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state. Only `AuthProvider` writes it.
pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(role: Role) -> AuthState {
        AuthState {
            user_info: Some(UserInfo {
                user_id: "1".to_string(),
                user_name: "alice".to_string(),
                email: None,
                role,
            }),
            checked: true,
        }
    }

    #[test]
    fn test_anonymous_has_no_role() {
        let state = AuthState {
            user_info: None,
            checked: true,
        };
        assert!(!state.has_role(Role::User));
        assert!(!AuthState::default().has_role(Role::Monitor));
    }

    #[test]
    fn test_use_auth_reads_provided_state() {
        let owner = leptos::reactive::owner::Owner::new();
        owner.set();

        let (auth_state, _) = signal(state_with(Role::Monitor));
        provide_context(auth_state);
        assert!(use_auth().with_untracked(|s| s.has_role(Role::Monitor)));
    }

    #[test]
    fn test_role_check_delegates_to_user() {
        assert!(state_with(Role::Admin).has_role(Role::Monitor));
        assert!(!state_with(Role::User).has_role(Role::Monitor));
    }
}
