//! Page behaviors installed once the landing markup is in the DOM.

pub mod accordion;
pub mod anchor_scroll;
pub mod momentum;
pub mod navbar;
pub mod reveal;

use log::{error, info};

use crate::config::EffectsConfig;
use crate::dom;
use crate::error::Result;

use accordion::AccordionWidget;
use anchor_scroll::AnchorScroll;
use momentum::MomentumLoop;
use navbar::Navbar;
use reveal::Reveal;

/// Owns every installed behavior. Dropping it detaches them all.
#[derive(Default)]
pub struct Effects {
    anchor_scroll: Option<AnchorScroll>,
    momentum: Option<MomentumLoop>,
    reveal: Option<Reveal>,
    accordion: Option<AccordionWidget>,
    navbar: Option<Navbar>,
}

impl Effects {
    /// Names of the behaviors that installed successfully.
    pub fn installed(&self) -> Vec<&'static str> {
        [
            ("anchor scroll", self.anchor_scroll.is_some()),
            ("momentum scroll", self.momentum.is_some()),
            ("reveal animations", self.reveal.is_some()),
            ("FAQ accordion", self.accordion.is_some()),
            ("navbar", self.navbar.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, ok)| ok.then_some(name))
        .collect()
    }

    /// Trailing scroll offset from the momentum loop, if it is running.
    pub fn momentum_offset(&self) -> Option<f64> {
        self.momentum.as_ref().map(MomentumLoop::current)
    }
}

fn keep<T>(name: &str, installed: Result<T>) -> Option<T> {
    installed
        .map_err(|e| error!("Failed to install {}: {}", name, e))
        .ok()
}

/// Installs all behaviors. One failing does not stop the others.
pub fn install(config: &EffectsConfig) -> Result<Effects> {
    let window = dom::window()?;
    let document = dom::document()?;

    let effects = Effects {
        anchor_scroll: keep(
            "anchor scroll",
            AnchorScroll::install(&document, &config.anchor),
        ),
        momentum: keep("momentum scroll", MomentumLoop::install(&window, &config.momentum)),
        reveal: keep("reveal animations", Reveal::install(&document, &config.reveal)),
        accordion: keep("FAQ accordion", AccordionWidget::install(&document, &config.accordion)),
        navbar: keep("navbar", Navbar::install(&window, &document, &config.navbar)),
    };
    info!("Page effects installed: {}", effects.installed().join(", "));
    Ok(effects)
}

impl Drop for Effects {
    fn drop(&mut self) {
        info!("Page effects removed");
    }
}
