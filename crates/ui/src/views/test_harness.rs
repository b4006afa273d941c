use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock};
use verify_core::fixtures;
use verify_core::model::{Assessment, UserIdentityDraft};
use verify_core::time::fixed_now;

use crate::context::{UiApp, build_app_context, use_ui_state_provider};
use crate::routes::Route;
use crate::views::{
    AssessmentView, BackgroundView, ChatPanel, CodePanel, DashboardView, HomeView, LoginView,
    NotFoundView, ReportView, UploadView, VerifyView,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Dashboard,
    Upload,
    Assessment,
    Verify,
    Background,
    Report,
    NotFound,
    /// The interview chat on its own, without the proctoring gate.
    Chat,
    /// The coding panel with every interview question already answered.
    Code,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    services: AppServices,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(props.services.clone());
    use_context_provider(|| build_app_context(&app));
    use_ui_state_provider();
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Props, Clone)]
struct AppRouterProps {
    services: AppServices,
    path: &'static str,
}

impl PartialEq for AppRouterProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// The real route table, starting at `path`.
#[component]
fn AppRouterHarness(props: AppRouterProps) -> Element {
    let path = props.path;
    use_context_provider(|| Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>);
    let app: Arc<dyn UiApp> = Arc::new(props.services.clone());
    use_context_provider(|| build_app_context(&app));
    use_ui_state_provider();
    rsx! { Router::<Route> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

fn answered_assessment() -> Assessment {
    let mut assessment = Assessment::new(fixtures::interview_prompts(), fixtures::code_challenges());
    while !assessment.qa().is_finished() {
        assessment.ask_current().expect("prompt");
        assessment.submit_answer("answer").expect("answer");
    }
    assessment.begin_coding().expect("coding");
    assessment
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let assessment = use_signal(move || match view {
        ViewKind::Code => answered_assessment(),
        _ => Assessment::new(fixtures::interview_prompts(), fixtures::code_challenges()),
    });

    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Verify => rsx! { VerifyView {} },
        ViewKind::Background => rsx! { BackgroundView {} },
        ViewKind::Report => rsx! { ReportView {} },
        ViewKind::NotFound => rsx! { NotFoundView { segments: vec!["missing".to_owned()] } },
        ViewKind::Chat => rsx! { ChatPanel { assessment, on_complete: move |()| {} } },
        ViewKind::Code => rsx! { CodePanel { assessment, on_complete: move |()| {} } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the rendered HTML satisfies `done`, giving
    /// up after a handful of rounds.
    pub async fn drive_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        let mut html = self.render();
        for _ in 0..10 {
            if done(&html) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    build_harness(view, services)
}

pub async fn setup_signed_in_harness(view: ViewKind, name: &str) -> ViewHarness {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    sign_in(&services, name).await;
    build_harness(view, services)
}

/// Mount the full router at `path` with nobody signed in.
pub fn setup_routed_harness(path: &'static str) -> ViewHarness {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    build_routed_harness(path, services)
}

pub async fn setup_signed_in_routed_harness(path: &'static str, name: &str) -> ViewHarness {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    sign_in(&services, name).await;
    build_routed_harness(path, services)
}

fn build_routed_harness(path: &'static str, services: AppServices) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppRouterProps {
            services: services.clone(),
            path,
        },
    );
    ViewHarness { dom, services }
}

async fn sign_in(services: &AppServices, name: &str) {
    let identity = UserIdentityDraft::new(name, "candidate@example.com")
        .validate(fixed_now())
        .expect("valid identity");
    services
        .access()
        .complete_login(identity)
        .await
        .expect("login");
}

fn build_harness(view: ViewKind, services: AppServices) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            services: services.clone(),
            view,
        },
    );
    ViewHarness { dom, services }
}
