use api::User;
use dioxus::prelude::*;

/// Passive list of users. Renders exactly what it is given; the owner replaces
/// the whole collection on every re-fetch.
#[component]
pub fn UsersList(users: Vec<User>) -> Element {
    rsx! {
        div {
            for user in users {
                h4 {
                    key: "{user.id}",
                    class: "well",
                    "{user.username}"
                }
            }
        }
    }
}
