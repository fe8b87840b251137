use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON element that overrides the defaults below.
pub const CONFIG_ISLAND_ID: &str = "page-effects-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct EffectsConfig {
    pub reveal: RevealConfig,
    pub accordion: AccordionConfig,
    pub navbar: NavbarConfig,
    pub momentum: MomentumConfig,
    pub anchor: AnchorConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub variant_attribute: String,
    pub delay_attribute: String,
    /// Fraction of the element that has to be visible.
    pub threshold: f64,
    pub root_margin: String,
    pub animated_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "[data-animate]".to_string(),
            variant_attribute: "data-animate".to_string(),
            delay_attribute: "data-delay".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            animated_class: "animate-in".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AccordionConfig {
    pub item_selector: String,
    pub question_selector: String,
    pub answer_selector: String,
    pub icon_selector: String,
    pub open_max_height: String,
    pub open_padding_top: String,
    pub open_padding_bottom: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item".to_string(),
            question_selector: ".faq-question".to_string(),
            answer_selector: ".faq-answer".to_string(),
            icon_selector: ".faq-icon".to_string(),
            open_max_height: "20rem".to_string(),
            open_padding_top: "0.5rem".to_string(),
            open_padding_bottom: "1rem".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavbarConfig {
    pub navbar_id: String,
    pub open_button_id: String,
    pub menu_id: String,
    pub close_button_id: String,
    pub link_selector: String,
    /// Offsets strictly above this many pixels elevate the navbar.
    pub elevation_threshold: f64,
    pub elevated_classes: Vec<String>,
    /// Class that pushes the mobile menu off screen.
    pub hidden_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_string(),
            open_button_id: "mobile-menu-btn".to_string(),
            menu_id: "mobile-menu".to_string(),
            close_button_id: "mobile-menu-close".to_string(),
            link_selector: ".mobile-menu-link".to_string(),
            elevation_threshold: 50.0,
            elevated_classes: vec!["bg-white/15".to_string(), "backdrop-blur-lg".to_string()],
            hidden_class: "-translate-x-full".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MomentumConfig {
    pub easing: f64,
    pub snap_distance: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            easing: 0.1,
            snap_distance: 0.5,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
    /// Hrefs left to the browser's own navigation.
    pub ignored_hrefs: Vec<String>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
            ignored_hrefs: vec!["#".to_string(), "#!".to_string()],
        }
    }
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the config island if the page has one, defaults otherwise.
    pub fn load(document: &Document) -> Self {
        let raw = match document.get_element_by_id(CONFIG_ISLAND_ID) {
            Some(island) => island.text_content().unwrap_or_default(),
            None => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ISLAND_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = EffectsConfig::default();
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.navbar.elevation_threshold, 50.0);
        assert_eq!(config.navbar.elevated_classes, vec!["bg-white/15", "backdrop-blur-lg"]);
        assert_eq!(config.accordion.open_max_height, "20rem");
        assert_eq!(config.momentum.snap_distance, 0.5);
        assert_eq!(config.anchor.ignored_hrefs, vec!["#", "#!"]);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = EffectsConfig::from_json(
            r#"{"navbar": {"elevation_threshold": 120}, "reveal": {"threshold": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.navbar.elevation_threshold, 120.0);
        assert_eq!(config.navbar.menu_id, "mobile-menu");
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.animated_class, "animate-in");
        assert_eq!(config.accordion, AccordionConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EffectsConfig::from_json("{}").unwrap(), EffectsConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EffectsConfig::from_json("{\"navbar\": ").is_err());
        assert!(EffectsConfig::from_json(r#"{"momentum": {"easing": "fast"}}"#).is_err());
    }
}
