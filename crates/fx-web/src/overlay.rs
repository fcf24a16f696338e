use fx_core::AppMode;
use web_sys as web;

const MODE_INDICATOR_ID: &str = "mode-indicator";

/// Reflect the current mode on `#mode-indicator`, if the page has one.
#[inline]
pub fn show_mode(document: &web::Document, mode: AppMode) {
    if let Some(el) = document.get_element_by_id(MODE_INDICATOR_ID) {
        let _ = el.set_attribute("data-mode", mode.as_str());
        el.set_text_content(Some(mode.as_str()));
    }
}
