//! Global keyboard bridge.
//!
//! Installs a window-level `keydown` listener in the webview and forwards
//! each key name to the [`KeyBus`]. The listener is removed when the
//! owning component unmounts.

use dioxus::prelude::*;
use folio_core::KeyBus;

/// Registers the listener and streams `event.key` back to Rust
const INSTALL_BRIDGE: &str = r#"
    const onKey = (event) => dioxus.send(event.key);
    window.addEventListener("keydown", onKey);
    window.__folioRemoveKeyBridge = () => {
        window.removeEventListener("keydown", onKey);
        delete window.__folioRemoveKeyBridge;
    };
    await new Promise(() => {});
"#;

const REMOVE_BRIDGE: &str = r#"
    if (window.__folioRemoveKeyBridge) {
        window.__folioRemoveKeyBridge();
    }
"#;

/// Hook forwarding global key presses to `bus` while the caller is mounted
pub fn use_global_keys(bus: KeyBus) {
    use_future(move || {
        let bus = bus.clone();
        async move {
            let mut bridge = document::eval(INSTALL_BRIDGE);
            tracing::debug!("Key bridge installed");

            loop {
                match bridge.recv::<String>().await {
                    Ok(key) => bus.publish(&key),
                    Err(e) => {
                        tracing::warn!("Key bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        }
    });

    use_drop(|| {
        document::eval(REMOVE_BRIDGE);
        tracing::debug!("Key bridge removed");
    });
}
