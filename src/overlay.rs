use web_sys as web;

use crate::constants::{CAPTION_ID, CATEGORY_ID};

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Name of the focused card, shown next to the active card.
pub fn update_caption(document: &web::Document, caption: &str) {
    set_text(document, CAPTION_ID, caption);
}

/// Category label of the ring; hidden when empty.
pub fn update_category(document: &web::Document, category: &str) {
    if let Some(el) = document.get_element_by_id(CATEGORY_ID) {
        el.set_text_content(Some(category));
        let cl = el.class_list();
        if category.is_empty() {
            _ = cl.add_1("hidden");
        } else {
            _ = cl.remove_1("hidden");
        }
    }
}
