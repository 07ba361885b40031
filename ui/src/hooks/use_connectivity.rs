//! Keeps the store's `offline` flag in step with the browser's connectivity.

use std::time::Duration;

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;

const CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Checks `navigator.onLine` right away and then every few seconds.
pub fn use_connectivity() {
    let store = use_context::<AppStateMut>();

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut offline = store.offline;
        async move {
            loop {
                let now_offline = !compat::is_online();
                if *offline.peek() != now_offline {
                    dioxus_logger::tracing::info!(
                        "connection is {}",
                        if now_offline { "offline" } else { "online" }
                    );
                    offline.set(now_offline);
                }
                compat::sleep(CHECK_INTERVAL).await;
            }
        }
    });
}
