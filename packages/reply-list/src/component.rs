use dioxus::prelude::*;

use crate::{use_replies, Replies};

/// The root of the dashboard: a reply list backed by whatever source the context provides.
pub fn app() -> Element {
    let replies = use_replies();

    rsx! {
        ReplyList { replies }
    }
}

/// A "Send API" button followed by one paragraph per reply, in arrival order.
#[component]
pub fn ReplyList(replies: Replies) -> Element {
    let entries = replies.store().entries();

    rsx! {
        button { class: "send-api", onclick: move |_| replies.activate(), "Send API" }
        // Replies are never removed or reordered, so the index is a stable key
        for (index, reply) in entries.into_iter().enumerate() {
            p { key: "{index}", "{reply}" }
        }
    }
}
