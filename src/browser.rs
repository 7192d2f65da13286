//! Browser Side Effects
//!
//! Notices, navigation and page lookups. Everything here touches `window`.

use log::warn;

use crate::route::Route;

/// Show a blocking notice
pub fn notify(message: &str) {
    warn!("notice: {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(route.path()) {
        warn!("navigation to {} failed: {:?}", route.path(), e);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// `content` of `<meta name="...">` in the document head
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
