use dioxus::prelude::*;

use api::{User, UserForm, UsersApi, UsersClient};
use ui::{AddUser, UsersList};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(UsersClient::from_env);
    let mut users = use_signal(Vec::<User>::new);
    let mut form = use_signal(UserForm::default);

    // Initial fetch on mount
    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.list_users().await {
                    Ok(fetched) => users.set(fetched),
                    Err(err) => tracing::error!("failed to fetch users: {err}"),
                }
            }
        }
    });

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                let mut pending = form();
                match pending.submit(&client).await {
                    Ok(fetched) => {
                        users.set(fetched);
                        form.set(pending);
                    }
                    // Silent failure: the fields stay as typed, only the log hears about it.
                    Err(err) => tracing::error!("failed to add user: {err}"),
                }
            });
        }
    };

    let dump = dump_users(&users());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container",
            div {
                class: "row",
                div {
                    class: "col-md-4",

                    h1 { "All Users" }
                    hr {}

                    AddUser {
                        username: form().username,
                        email: form().email,
                        on_username_input: move |evt: FormEvent| {
                            form.write().set_field("username", evt.value())
                        },
                        on_email_input: move |evt: FormEvent| {
                            form.write().set_field("email", evt.value())
                        },
                        onsubmit: handle_submit,
                    }

                    UsersList { users: users() }

                    pre { "{dump}" }
                }
            }
        }
    }
}

/// Debug view of the last fetched collection, rendered under the list.
fn dump_users(users: &[User]) -> String {
    serde_json::to_string_pretty(users).unwrap_or_default()
}
