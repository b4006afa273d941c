use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;
use verify_core::model::{IdentityError, UserIdentityDraft};

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};

fn identity_error_message(err: &IdentityError) -> &'static str {
    match err {
        IdentityError::EmptyName => "Please enter your name.",
        IdentityError::EmptyEmail => "Please enter your email.",
        IdentityError::InvalidEmail => "Please enter a valid email address.",
        _ => "Please check your details.",
    }
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut field_error = use_signal(|| None::<&'static str>);
    let mut state = use_signal(|| ViewState::<()>::Idle);

    let already_signed_in = ctx.access().login_destination();
    use_hook(move || {
        if let Some(destination) = already_signed_in {
            spawn(async move {
                navigator.replace(Route::from(destination));
            });
        }
    });

    let submit_ctx = ctx.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.read().is_loading() {
            return;
        }
        let draft = UserIdentityDraft::new(name(), email());
        let identity = match draft.validate(submit_ctx.now()) {
            Ok(identity) => identity,
            Err(err) => {
                field_error.set(Some(identity_error_message(&err)));
                return;
            }
        };
        field_error.set(None);
        state.set(ViewState::Loading);

        let access = submit_ctx.access();
        let mut signed_in = ui.identity;
        spawn(async move {
            match access.complete_login(identity.clone()).await {
                Ok(destination) => {
                    signed_in.set(Some(identity));
                    state.set(ViewState::Ready(()));
                    navigator.replace(Route::from(destination));
                }
                Err(err) => {
                    warn!(error = %err, "login failed");
                    state.set(ViewState::Error(ViewError::Storage));
                }
            }
        });
    };

    let submittable = UserIdentityDraft::new(name(), email()).is_submittable();
    let busy = state.read().is_loading();
    let pending = ctx.access().pending_destination();

    rsx! {
        div { class: "page page--login",
            header { class: "page-heading",
                h1 { "Account Access" }
                p { "Sign in to your account to continue your verification journey." }
            }

            if let Some(destination) = pending {
                p { class: "notice", "Sign in to continue to {destination.path()}." }
            }

            form { class: "card form", onsubmit: submit,
                label { r#for: "login-name", "Name" }
                input {
                    id: "login-name",
                    r#type: "text",
                    placeholder: "Jane Doe",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "jane@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                if let Some(message) = field_error() {
                    p { class: "form-error", "{message}" }
                }
                if let ViewState::Error(err) = state() {
                    p { class: "form-error", "{err.message()}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !submittable || busy,
                    if busy { "Signing In..." } else { "Sign In" }
                }
            }
        }
    }
}
