//! Document Theme
//!
//! Mirrors the theme flag onto the page: `dark` on `<html>` plus the body
//! colour classes. Requires a browser environment.

use crate::models::Theme;

pub const PAGE_TITLE: &str = "To-Do-list";

const DARK_BODY: [&str; 2] = ["bg-gray-900", "text-white"];
const LIGHT_BODY: [&str; 2] = ["bg-gray-100", "text-gray-900"];

/// Body classes to add and to remove for `theme`
fn body_classes(theme: Theme) -> ([&'static str; 2], [&'static str; 2]) {
    if theme.is_dark() {
        (DARK_BODY, LIGHT_BODY)
    } else {
        (LIGHT_BODY, DARK_BODY)
    }
}

/// Apply `theme` to the current document
pub fn apply(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = doc.document_element() {
        let class_list = root.class_list();
        let result = if theme.is_dark() {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if let Err(err) = result {
            tracing::warn!(?err, "failed updating root theme class");
        }
    }

    if let Some(body) = doc.body() {
        let (add, remove) = body_classes(theme);
        let class_list = body.class_list();
        if let Err(err) = class_list.add_2(add[0], add[1]) {
            tracing::warn!(?err, "failed adding body theme classes");
        }
        if let Err(err) = class_list.remove_2(remove[0], remove[1]) {
            tracing::warn!(?err, "failed removing body theme classes");
        }
    }
}

pub fn set_page_title() {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(PAGE_TITLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_classes_swap() {
        assert_eq!(body_classes(Theme::Dark), (DARK_BODY, LIGHT_BODY));
        assert_eq!(body_classes(Theme::Light), (LIGHT_BODY, DARK_BODY));
    }
}
