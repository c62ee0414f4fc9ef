use dioxus::prelude::*;

/// Create a [`ReplyStore`] owned by the current component.
///
/// The store starts empty and is dropped when the component unmounts.
#[doc = include_str!("../docs/rules_of_hooks.md")]
pub fn use_reply_store() -> ReplyStore {
    let entries = use_signal(Vec::new);
    ReplyStore { entries }
}

/// The ordered list of replies received so far.
///
/// The store only grows: replies are appended in the order they arrive and are never deduplicated or removed.
/// Writing to it re-renders every component that read it.
#[derive(Clone, Copy, PartialEq)]
pub struct ReplyStore {
    entries: Signal<Vec<String>>,
}

impl ReplyStore {
    /// Append a reply to the end of the store.
    pub fn append(&mut self, reply: String) {
        self.entries.write().push(reply);
    }

    /// The number of replies in the store.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no reply has arrived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// A copy of every reply, in arrival order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.cloned()
    }
}

impl std::fmt::Debug for ReplyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.peek().iter()).finish()
    }
}
