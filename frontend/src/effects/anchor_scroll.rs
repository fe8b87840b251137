use log::{debug, info};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::AnchorConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

/// The element id an in-page link should scroll to, or `None` when the
/// browser's own navigation should handle it.
pub fn scroll_target<'a>(href: &'a str, ignored: &[String]) -> Option<&'a str> {
    if ignored.iter().any(|skip| skip == href) {
        return None;
    }
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth scrolling for `a[href^="#"]` links.
pub struct AnchorScroll {
    _listeners: Vec<Listener>,
}

impl AnchorScroll {
    pub fn install(document: &Document, config: &AnchorConfig) -> Result<Self> {
        let anchors = dom::query_all(document, &config.selector)?;
        let mut listeners = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            let document = document.clone();
            let link = anchor.clone();
            let ignored = config.ignored_hrefs.clone();
            listeners.push(Listener::new(&anchor, "click", move |e| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(id) = scroll_target(&href, &ignored) else {
                    return;
                };
                e.prevent_default();
                match document.get_element_by_id(id) {
                    Some(target) => {
                        debug!("Scrolling to #{}", id);
                        scroll_to(&target);
                    }
                    None => debug!("No element with id {}, nothing to scroll to", id),
                }
            })?);
        }
        info!("Smooth scrolling on {} anchors", listeners.len());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnchorConfig;

    fn target(href: &str) -> Option<&str> {
        scroll_target(href, &AnchorConfig::default().ignored_hrefs)
    }

    #[test]
    fn placeholders_keep_native_navigation() {
        assert_eq!(target("#"), None);
        assert_eq!(target("#!"), None);
    }

    #[test]
    fn fragment_links_scroll_to_their_id() {
        assert_eq!(target("#features"), Some("features"));
        assert_eq!(target("#missing-id"), Some("missing-id"));
        assert_eq!(target("#faq-2"), Some("faq-2"));
    }

    #[test]
    fn non_fragment_hrefs_are_left_alone() {
        assert_eq!(target("/pricing"), None);
        assert_eq!(target("https://example.com/#top"), None);
        assert_eq!(target(""), None);
    }

    #[test]
    fn ignored_list_is_configurable() {
        let ignored = vec!["#top".to_string()];
        assert_eq!(scroll_target("#top", &ignored), None);
        assert_eq!(scroll_target("#!", &ignored), Some("!"));
    }
}
