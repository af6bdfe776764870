use crate::api::auth;
use log::error;
use shared::{SessionDto, UserDto};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<SessionDto>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && match (&self.session, &other.session) {
                (Some(a), Some(b)) => a == b,
                (None, None) => true,
                _ => false,
            }
    }
}

impl AuthState {
    pub fn viewer(&self) -> Option<&UserDto> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.viewer().is_some()
    }

    /// Anti-forgery token for the join form; empty until the session
    /// loads, which also keeps the form inert until then.
    pub fn csrf_token(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.csrf_token.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SessionLoading,
    SessionLoaded(SessionDto),
    SessionError(String),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SessionLoading => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::SessionLoaded(session) => Rc::new(Self {
                session: Some(session),
                loading: false,
                error: None,
            }),
            AuthAction::SessionError(error) => Rc::new(Self {
                session: None,
                loading: false,
                error: Some(error),
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub refresh: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(AuthState::default);

    // Load the session once on mount
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::SessionLoading);
                match auth::get_session().await {
                    Ok(session) => auth.dispatch(AuthAction::SessionLoaded(session)),
                    Err(e) => {
                        error!("Failed to load session: {}", e);
                        auth.dispatch(AuthAction::SessionError(e));
                    }
                }
            });
        });
    }

    let refresh = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                match auth::get_session().await {
                    Ok(session) => auth.dispatch(AuthAction::SessionLoaded(session)),
                    Err(e) => {
                        error!("Failed to refresh session: {}", e);
                    }
                }
            });
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        refresh,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
