use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::{use_reply_store, HttpReplySource, ReplyListConfig, ReplyStore, SharedReplySource};

/// Create the state behind a reply list and the action that fills it.
///
/// The reply source is resolved once, on the first render:
/// - a [`SharedReplySource`] from context wins,
/// - otherwise an [`HttpReplySource`] is built from the [`ReplyListConfig`] in context,
/// - otherwise from [`ReplyListConfig::default`].
///
/// ```rust, no_run
/// use dioxus::prelude::*;
/// use reply_list::{use_replies, ReplyList};
///
/// fn app() -> Element {
///     let replies = use_replies();
///     rsx! { ReplyList { replies } }
/// }
/// ```
#[doc = include_str!("../docs/rules_of_hooks.md")]
pub fn use_replies() -> Replies {
    let source = use_hook(|| {
        try_consume_context::<SharedReplySource>().unwrap_or_else(|| {
            let config = try_consume_context::<ReplyListConfig>().unwrap_or_default();
            HttpReplySource::from_config(&config).into()
        })
    });

    let mut store = use_reply_store();
    let mut in_flight = use_signal(|| 0_usize);

    let activate = use_callback(move |()| {
        let source = source.clone();
        in_flight += 1;
        debug!(source = %source.describe(), in_flight = *in_flight.peek(), "dispatching fetch");

        // The task belongs to this scope, so an unmounted list drops its pending fetches along with the store.
        spawn(async move {
            match source.fetch().await {
                Ok(reply) => {
                    let bytes = reply.len();
                    store.append(reply);
                    debug!(bytes, replies = store.len(), "appended reply");
                }
                Err(err) => {
                    warn!(source = %source.describe(), "fetch failed: {err}");
                }
            }
            in_flight -= 1;
        });
    });

    Replies {
        store,
        in_flight,
        activate,
    }
}

/// Whether a reply list is waiting on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Every fetch has settled.
    Idle,

    /// At least one fetch is still outstanding.
    Fetching,
}

/// A handle to the state created by [`use_replies`].
///
/// The handle is `Copy`, so it can be moved into event handlers and passed to child components freely.
#[derive(Clone, Copy, PartialEq)]
pub struct Replies {
    store: ReplyStore,
    in_flight: Signal<usize>,
    activate: Callback<()>,
}

impl Replies {
    /// Start one fetch. Its reply is appended to the store when it settles.
    ///
    /// Activations are never blocked: calling this while other fetches are outstanding starts another one, and
    /// replies are appended in whatever order the responses arrive.
    pub fn activate(&self) {
        self.activate.call(());
    }

    /// The replies received so far.
    pub fn store(&self) -> ReplyStore {
        self.store
    }

    /// How many fetches have started but not yet settled.
    pub fn in_flight(&self) -> usize {
        *self.in_flight.read()
    }

    /// [`FetchPhase::Fetching`] while any fetch is outstanding.
    pub fn phase(&self) -> FetchPhase {
        match self.in_flight() {
            0 => FetchPhase::Idle,
            _ => FetchPhase::Fetching,
        }
    }
}

impl std::fmt::Debug for Replies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Replies")
            .field("store", &self.store)
            .field("in_flight", &*self.in_flight.peek())
            .finish()
    }
}
