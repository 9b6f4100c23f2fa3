use contracts::system::auth::{AuthError, Credentials, SessionGate};
use leptos::prelude::*;

/// Handle to the session gate shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    gate: RwSignal<SessionGate>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.gate.with(|gate| gate.is_authenticated())
    }

    pub fn user_email(&self) -> Option<String> {
        self.gate
            .with(|gate| gate.session().map(|session| session.email.clone()))
    }

    /// Opens a session; switching to the main layout follows from the signal.
    pub fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let mut result = Ok(());
        self.gate.update(|gate| {
            result = gate.login(credentials).map(|_| ());
        });
        result
    }

    pub fn logout(&self) {
        self.gate.update(|gate| gate.logout());
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    provide_context(AuthContext {
        gate: RwSignal::new(SessionGate::new()),
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
