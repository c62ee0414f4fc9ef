//! The reply dashboard: one button that calls the local test API and a list of everything it has answered so far.
//!
//! Run it with `dx serve --platform web` or `dx serve --platform desktop`.

use dioxus::logger::tracing::{Level, info};
use reply_list::{ReplyListConfig, app};

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = ReplyListConfig::default();
    info!(endpoint = %config.endpoint, "launching reply dashboard");

    dioxus::LaunchBuilder::new().with_context(config).launch(app);
}
