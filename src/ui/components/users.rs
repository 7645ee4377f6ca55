use dioxus::prelude::*;

use crate::domain::entities::query::SortSpec;
use crate::domain::entities::user::{User, UserField};
use crate::domain::view::page::UsersPage;
use crate::domain::view::pending::MutationKey;
use crate::ui::state::app_state::Services;
use crate::ui::theme;
use crate::usecase::services::list_engine;

/// Header text, with an arrow on the active sort column.
pub fn sort_label(field: UserField, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.field == field => {
            format!("{} {}", field.label(), spec.direction.indicator())
        }
        _ => field.label().to_string(),
    }
}

#[component]
pub fn Users() -> Element {
    let services = use_context::<Services>();
    let page_size = services.config.page_size;
    let mut page = use_signal(|| UsersPage::new(page_size));

    let users_for_load = services.users.clone();
    use_future(move || {
        let users = users_for_load.clone();
        async move {
            let _ = list_engine::load(&users, &mut page).await;
        }
    });

    let current = page.read();
    if current.loading {
        return rsx! {
            p { "Loading..." }
        };
    }

    let listing = &current.view;
    let visible: Vec<User> = listing.visible_page().into_iter().cloned().collect();
    let name_filter = listing.filters().pattern(UserField::Name).to_string();
    let email_filter = listing.filters().pattern(UserField::Email).to_string();
    let sort = listing.sort();
    let current_page = listing.current_page();
    let total_pages = listing.total_pages().max(1);
    let has_previous = listing.has_previous_page();
    let has_next = listing.has_next_page();
    let form_open = current.mode.is_open();
    let status_line = current.status.message.clone();
    let status_style = theme::status_style(current.status.is_error);
    drop(current);

    let headers: Vec<(UserField, String, bool)> = UserField::ALL
        .into_iter()
        .map(|field| {
            let active = sort.is_some_and(|spec| spec.field == field);
            (field, sort_label(field, sort), active)
        })
        .collect();

    rsx! {
        form {
            input {
                r#type: "text",
                placeholder: "Filter by name",
                name: "name",
                value: "{name_filter}",
                oninput: move |event| page.write().view.set_filter(UserField::Name, event.value()),
            }
            input {
                r#type: "text",
                placeholder: "Filter by email",
                name: "email",
                value: "{email_filter}",
                oninput: move |event| page.write().view.set_filter(UserField::Email, event.value()),
            }
        }
        table { style: theme::table_style(),
            thead {
                tr {
                    for (field, label, active) in headers {
                        th {
                            key: "{label}",
                            style: theme::table_header_cell_style(active),
                            onclick: move |_| page.write().view.set_sort(field),
                            "{label}"
                        }
                    }
                    th { style: theme::table_header_cell_style(false), "Actions" }
                }
            }
            tbody {
                for user in visible {
                    UserRow { key: "{user.id}", user: user.clone(), page }
                }
            }
        }
        div { style: "padding: 8px 0;",
            button {
                style: theme::button_style(false),
                disabled: !has_previous,
                onclick: move |_| page.write().view.goto_page(current_page.saturating_sub(1)),
                "Prev"
            }
            span { " Page {current_page} of {total_pages} " }
            button {
                style: theme::button_style(false),
                disabled: !has_next,
                onclick: move |_| page.write().view.goto_page(current_page + 1),
                "Next"
            }
        }
        button {
            style: theme::button_style(true),
            disabled: form_open,
            onclick: move |_| page.write().begin_add(),
            "Add User"
        }
        if form_open {
            UserForm { page }
        }
        p { style: status_style, "{status_line}" }
    }
}

#[component]
fn UserRow(user: User, page: Signal<UsersPage>) -> Element {
    let mut page = page;
    let services = use_context::<Services>();
    let id = user.id;
    let busy = page.read().pending.is_pending(MutationKey::Record(id));

    rsx! {
        tr {
            td { style: theme::table_cell_style(), "{user.name}" }
            td { style: theme::table_cell_style(), "{user.email}" }
            td { style: theme::table_cell_style(),
                button {
                    style: theme::button_style(false),
                    disabled: busy,
                    onclick: move |_| {
                        page.write().begin_edit(id);
                    },
                    "Edit"
                }
                button {
                    style: theme::button_style(false),
                    disabled: busy,
                    onclick: move |_| {
                        let users = services.users.clone();
                        spawn(async move {
                            let _ = list_engine::delete(&users, &mut page, id).await;
                        });
                    },
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn UserForm(page: Signal<UsersPage>) -> Element {
    let mut page = page;
    let services = use_context::<Services>();
    let current = page.read();
    let fields = current.form.clone();
    let title = current.mode.title();
    let submit_label = current.mode.submit_label();
    let submitting = current
        .submit_key()
        .is_some_and(|key| current.pending.is_pending(key));
    drop(current);

    rsx! {
        div { style: theme::modal_style(),
            h3 { "{title}" }
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    let users = services.users.clone();
                    spawn(async move {
                        let _ = list_engine::submit(&users, &mut page).await;
                    });
                },
                label {
                    "Name:"
                    input {
                        r#type: "text",
                        name: "name",
                        value: "{fields.name}",
                        oninput: move |event| page.write().form.name = event.value(),
                    }
                }
                label {
                    "Email:"
                    input {
                        r#type: "email",
                        name: "email",
                        value: "{fields.email}",
                        oninput: move |event| page.write().form.email = event.value(),
                    }
                }
                label {
                    input {
                        r#type: "submit",
                        style: theme::button_style(true),
                        disabled: submitting,
                        value: "{submit_label}",
                    }
                    button {
                        r#type: "button",
                        style: theme::button_style(false),
                        onclick: move |_| page.write().close_form(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
