use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::ui::components::upload::UploadVideo;
use crate::ui::components::users::Users;
use crate::ui::state::app_state::Services;
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| Services::from_config(config));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { style: theme::root_container_style(),
            nav { style: theme::nav_style(),
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Users {}, "Users" }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        h2 { "Video upload" }
        UploadVideo {}
    }
}
