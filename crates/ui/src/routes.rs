use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};
use services::GateDecision;
use tracing::warn;
use verify_core::model::Destination;

use crate::context::{AppContext, UiState};
use crate::views::{
    AssessmentView, BackgroundView, DashboardView, HomeView, LoginView, NotFoundView,
    ReportView, UploadView, VerifyView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[layout(Protected)]
            #[route("/dashboard", DashboardView)] Dashboard {},
            #[route("/upload", UploadView)] Upload {},
            #[route("/assessment", AssessmentView)] Assessment {},
            #[route("/verify", VerifyView)] Verify {},
            #[route("/background", BackgroundView)] Background {},
            #[route("/report", ReportView)] Report {},
        #[end_layout]
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn destination(&self) -> Destination {
        match self {
            Route::Home {} => Destination::Home,
            Route::Login {} => Destination::Login,
            Route::Dashboard {} => Destination::Dashboard,
            Route::Upload {} => Destination::Upload,
            Route::Assessment {} => Destination::Assessment,
            Route::Verify {} => Destination::Verify,
            Route::Background {} => Destination::Background,
            Route::Report {} => Destination::Report,
            Route::NotFound { .. } => Destination::NotFound,
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Upload => Route::Upload {},
            Destination::Assessment => Route::Assessment {},
            Destination::Verify => Route::Verify {},
            Destination::Background => Route::Background {},
            Destination::Report => Route::Report {},
            Destination::NotFound => Route::NotFound {
                segments: vec!["404".to_owned()],
            },
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let identity = ui.identity.read().clone();

    let sign_out = move |_| {
        let ctx = ctx.clone();
        let mut signed_in = ui.identity;
        spawn(async move {
            if let Err(err) = ctx.services().logout().await {
                warn!(error = %err, "sign out could not clear stored session");
            }
            signed_in.set(None);
            navigator.replace(Route::Home {});
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "VerifyMe" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                if identity.is_some() {
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li { Link { to: Route::Upload {}, "Upload" } }
                    li { Link { to: Route::Assessment {}, "Assessment" } }
                    li { Link { to: Route::Verify {}, "Verify" } }
                    li { Link { to: Route::Background {}, "Background" } }
                    li { Link { to: Route::Report {}, "Report" } }
                }
            }
            div { class: "navbar__account",
                if let Some(identity) = identity {
                    span { class: "navbar__user", "{identity.name()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: sign_out,
                        "Sign Out"
                    }
                } else {
                    Link { class: "btn btn-primary", to: Route::Login {}, "Sign In" }
                }
            }
        }
    }
}

/// Renders protected pages for signed-in visitors and sends everyone else to
/// the login page, remembering where they were going.
#[component]
fn Protected() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    // Subscribe so signing out re-runs the guard.
    let _signed_in = ui.identity.read().is_some();

    match ctx.access().guard(route.destination()) {
        GateDecision::Allow => rsx! { Outlet::<Route> {} },
        GateDecision::RedirectToLogin { from } => {
            spawn(async move {
                tracing::debug!(%from, "redirecting to login");
                navigator.replace(Route::Login {});
            });
            rsx! {
                p { class: "gate-redirect", "Redirecting to sign in..." }
            }
        }
    }
}
