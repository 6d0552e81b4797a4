//! Controlled add-user form.

use dioxus::prelude::*;

/// The add-user form: two controlled inputs plus a submit button.
///
/// Both values are driven entirely by props; every keystroke and the submit are
/// surfaced to the owner through event handlers. The component holds no state of
/// its own.
#[component]
pub fn AddUser(
    username: String,
    email: String,
    on_username_input: EventHandler<FormEvent>,
    on_email_input: EventHandler<FormEvent>,
    onsubmit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        form {
            onsubmit: move |evt| onsubmit.call(evt),

            div {
                class: "form-group",
                input {
                    r#type: "text",
                    name: "username",
                    class: "form-control input-lg",
                    placeholder: "Enter a username",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| on_username_input.call(evt),
                }
            }

            div {
                class: "form-group",
                input {
                    r#type: "email",
                    name: "email",
                    class: "form-control input-lg",
                    placeholder: "Enter an email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| on_email_input.call(evt),
                }
            }

            div {
                class: "form-group",
                input {
                    r#type: "submit",
                    value: "Submit",
                    class: "btn btn-primary btn-lg btn-block",
                }
            }
        }
    }
}
