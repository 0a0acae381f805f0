use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::chat::Navigator;

pub const CONTACT_SECTION: &str = "contact";

/// Smoothly scrolls the element with the given id into view. Missing targets
/// are skipped.
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match target {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", id),
    }
}

/// Strips the leading `#` from an in-page link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct PageNavigator;

impl Navigator for PageNavigator {
    fn scroll_to_contact(&self) {
        scroll_to_section(CONTACT_SECTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
    }
}
