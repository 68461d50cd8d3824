use crate::constants::{CONTROLS_PANEL_ID, HIDDEN_CLASS};
use web_sys as web;

/// Flip the `hidden` class on the controls panel; the page stylesheet owns
/// what hidden looks like. Returns the new hidden state, or `None` when the
/// page has no panel.
pub fn toggle(document: &web::Document) -> Option<bool> {
    let panel = document.get_element_by_id(CONTROLS_PANEL_ID)?;
    match panel.class_list().toggle(HIDDEN_CLASS) {
        Ok(hidden) => {
            log::debug!("[controls] panel hidden={}", hidden);
            Some(hidden)
        }
        Err(e) => {
            log::warn!("[controls] could not toggle #{}: {:?}", CONTROLS_PANEL_ID, e);
            None
        }
    }
}
