use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::debug;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| debug!(%path, "no route for path"));

    rsx! {
        div { class: "page page--not-found",
            h1 { "404" }
            p { "Oops! The page you're looking for doesn't exist." }
            p { class: "muted", "{path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Return to Home" }
        }
    }
}
