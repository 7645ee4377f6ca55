use dioxus::prelude::*;
use tracing::warn;

use crate::domain::entities::media::{MediaFile, UploadProgress};
use crate::ui::components::player::DisplayVideo;
use crate::ui::state::app_state::Services;
use crate::ui::theme;

pub fn upload_button_label(uploading: bool, progress: UploadProgress) -> String {
    if uploading {
        format!("Uploading... {}%", progress.percent())
    } else {
        "Upload".to_string()
    }
}

async fn read_selected_file(event: &FormEvent) -> Option<MediaFile> {
    let selected = event.files().into_iter().next()?;
    let name = selected.name();
    match selected.read_bytes().await {
        Ok(bytes) => Some(MediaFile::new(name, bytes.to_vec())),
        Err(err) => {
            warn!(file = %name, error = %err, "could not read selected file");
            None
        }
    }
}

#[component]
pub fn UploadVideo() -> Element {
    let services = use_context::<Services>();
    let mut file = use_signal(|| None::<MediaFile>);
    let mut progress = use_signal(UploadProgress::default);
    let mut uploading = use_signal(|| false);
    let mut file_url = use_signal(|| None::<String>);
    let mut status = use_signal(String::new);

    let has_file = file.read().is_some();
    let button_label = upload_button_label(uploading(), progress());
    let player_url = file_url();
    let status_line = status();

    rsx! {
        div {
            label { r#for: "file-input", "Select a File" }
            input {
                id: "file-input",
                r#type: "file",
                accept: "video/*",
                onchange: move |event: FormEvent| async move {
                    if let Some(selected) = read_selected_file(&event).await {
                        file.set(Some(selected));
                    }
                },
            }
            button {
                style: theme::button_style(true),
                disabled: !has_file || uploading(),
                onclick: move |_| {
                    let Some(selected) = file.cloned() else {
                        return;
                    };
                    let uploads = services.uploads.clone();
                    uploading.set(true);
                    spawn(async move {
                        let mut on_progress = move |step: UploadProgress| progress.set(step);
                        match uploads.upload(selected, &mut on_progress).await {
                            Ok(media) => {
                                file_url.set(Some(media.file_url));
                                status.set(String::new());
                            }
                            Err(err) => status.set(err.to_string()),
                        }
                        uploading.set(false);
                    });
                },
                "{button_label}"
            }
            p { style: theme::status_style(true), "{status_line}" }
            if let Some(url) = player_url {
                DisplayVideo { file_url: url }
            }
        }
    }
}
