use dioxus::prelude::*;

use crate::ui::theme;

/// Embedded player for an uploaded media URL.
#[component]
pub fn DisplayVideo(file_url: String) -> Element {
    rsx! {
        div { style: theme::player_style(),
            video {
                src: "{file_url}",
                controls: true,
                width: "100%",
                height: "100%",
            }
        }
    }
}
