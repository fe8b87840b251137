use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

use crate::config::NavbarConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

/// Where a mobile-menu click came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTrigger {
    OpenButton,
    CloseButton,
    Link,
    /// A click that bubbled up to the panel. `on_backdrop` is true only when
    /// the panel itself was the target, not one of its children.
    Panel { on_backdrop: bool },
}

/// Classifies a click that reached the panel's listener. Only a click whose
/// target is the panel element itself counts as a backdrop click.
pub fn panel_click<T: PartialEq>(target: Option<&T>, panel: &T) -> MenuTrigger {
    MenuTrigger::Panel {
        on_backdrop: target == Some(panel),
    }
}

pub fn is_elevated(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    pub elevated: bool,
    pub menu: MenuState,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            elevated: false,
            menu: MenuState::Closed,
        }
    }
}

impl NavbarState {
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        self.elevated = is_elevated(offset, threshold);
        self.elevated
    }

    /// The menu state the trigger asks for, or `None` if it leaves the menu alone.
    pub fn on_menu(&mut self, trigger: MenuTrigger) -> Option<MenuState> {
        let next = match trigger {
            MenuTrigger::OpenButton => MenuState::Open,
            MenuTrigger::CloseButton | MenuTrigger::Link => MenuState::Closed,
            MenuTrigger::Panel { on_backdrop: true } => MenuState::Closed,
            MenuTrigger::Panel { on_backdrop: false } => return None,
        };
        self.menu = next;
        Some(next)
    }
}

struct NavElements {
    navbar: Element,
    menu: Element,
}

impl NavElements {
    fn set_elevated(&self, elevated: bool, config: &NavbarConfig) -> Result<()> {
        let classes = self.navbar.class_list();
        for class in &config.elevated_classes {
            if elevated {
                classes.add_1(class)?;
            } else {
                classes.remove_1(class)?;
            }
        }
        Ok(())
    }

    fn set_menu(&self, menu: MenuState, config: &NavbarConfig) -> Result<()> {
        let classes = self.menu.class_list();
        match menu {
            MenuState::Open => classes.remove_1(&config.hidden_class)?,
            MenuState::Closed => classes.add_1(&config.hidden_class)?,
        }
        Ok(())
    }
}

struct Shared {
    state: RefCell<NavbarState>,
    elements: NavElements,
    config: NavbarConfig,
}

impl Shared {
    fn scrolled(&self, window: &Window) {
        let elevated = self
            .state
            .borrow_mut()
            .on_scroll(dom::scroll_y(window), self.config.elevation_threshold);
        if let Err(e) = self.elements.set_elevated(elevated, &self.config) {
            warn!("Could not update navbar background: {}", e);
        }
    }

    fn menu(&self, trigger: MenuTrigger) {
        let Some(next) = self.state.borrow_mut().on_menu(trigger) else {
            return;
        };
        debug!("Mobile menu {:?} via {:?}", next, trigger);
        if let Err(e) = self.elements.set_menu(next, &self.config) {
            warn!("Could not toggle mobile menu: {}", e);
        }
    }
}

/// Scroll elevation plus the slide-in mobile menu.
pub struct Navbar {
    _listeners: Vec<Listener>,
}

impl Navbar {
    pub fn install(window: &Window, document: &Document, config: &NavbarConfig) -> Result<Self> {
        let navbar = dom::element_by_id(document, &config.navbar_id)?;
        let open_button = dom::element_by_id(document, &config.open_button_id)?;
        let menu = dom::element_by_id(document, &config.menu_id)?;
        let close_button = dom::element_by_id(document, &config.close_button_id)?;
        let links = dom::query_all(document, &config.link_selector)?;

        let shared = Rc::new(Shared {
            state: RefCell::new(NavbarState::default()),
            elements: NavElements {
                navbar,
                menu: menu.clone(),
            },
            config: config.clone(),
        });

        let mut listeners = Vec::with_capacity(links.len() + 4);

        listeners.push({
            let shared = shared.clone();
            let win = window.clone();
            Listener::new(window, "scroll", move |_| shared.scrolled(&win))?
        });
        listeners.push({
            let shared = shared.clone();
            Listener::new(&open_button, "click", move |_| {
                shared.menu(MenuTrigger::OpenButton)
            })?
        });
        listeners.push({
            let shared = shared.clone();
            Listener::new(&close_button, "click", move |_| {
                shared.menu(MenuTrigger::CloseButton)
            })?
        });
        for link in &links {
            let shared = shared.clone();
            listeners.push(Listener::new(link, "click", move |_| {
                shared.menu(MenuTrigger::Link)
            })?);
        }
        listeners.push({
            let shared = shared.clone();
            let panel: EventTarget = menu.clone().unchecked_into();
            Listener::new(&menu, "click", move |e| {
                shared.menu(panel_click(e.target().as_ref(), &panel))
            })?
        });

        // A reload mid-page starts below the threshold otherwise.
        shared.scrolled(window);
        info!("Navbar ready with {} menu links", links.len());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_boundary_is_exclusive() {
        assert!(!is_elevated(0.0, 50.0));
        assert!(!is_elevated(50.0, 50.0));
        assert!(is_elevated(50.5, 50.0));
        assert!(is_elevated(900.0, 50.0));
    }

    #[test]
    fn scroll_tracks_last_offset_only() {
        let mut state = NavbarState::default();
        assert!(state.on_scroll(120.0, 50.0));
        assert!(state.on_scroll(60.0, 50.0));
        assert!(!state.on_scroll(50.0, 50.0));
        assert!(!state.on_scroll(10.0, 50.0));
        assert!(!state.elevated);
    }

    #[test]
    fn scroll_does_not_touch_menu() {
        let mut state = NavbarState::default();
        state.on_menu(MenuTrigger::OpenButton);
        state.on_scroll(300.0, 50.0);
        assert_eq!(state.menu, MenuState::Open);
    }

    #[test]
    fn open_and_close_buttons() {
        let mut state = NavbarState::default();
        assert_eq!(state.on_menu(MenuTrigger::OpenButton), Some(MenuState::Open));
        assert_eq!(state.on_menu(MenuTrigger::CloseButton), Some(MenuState::Closed));
        assert_eq!(state.menu, MenuState::Closed);
    }

    #[test]
    fn link_click_closes_menu() {
        let mut state = NavbarState::default();
        state.on_menu(MenuTrigger::OpenButton);
        assert_eq!(state.on_menu(MenuTrigger::Link), Some(MenuState::Closed));
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut state = NavbarState::default();
        state.on_menu(MenuTrigger::OpenButton);

        assert_eq!(state.on_menu(MenuTrigger::Panel { on_backdrop: false }), None);
        assert_eq!(state.menu, MenuState::Open);

        assert_eq!(
            state.on_menu(MenuTrigger::Panel { on_backdrop: true }),
            Some(MenuState::Closed)
        );
        assert_eq!(state.menu, MenuState::Closed);
    }

    #[test]
    fn click_on_panel_itself_is_a_backdrop_click() {
        let panel = "mobile-menu";
        assert_eq!(
            panel_click(Some(&"mobile-menu"), &panel),
            MenuTrigger::Panel { on_backdrop: true }
        );
    }

    #[test]
    fn click_on_descendant_is_not_a_backdrop_click() {
        let panel = "mobile-menu";
        assert_eq!(
            panel_click(Some(&"mobile-menu-link"), &panel),
            MenuTrigger::Panel { on_backdrop: false }
        );
        assert_eq!(panel_click(None, &panel), MenuTrigger::Panel { on_backdrop: false });
    }

    #[test]
    fn descendant_click_keeps_menu_open_backdrop_closes_it() {
        let panel = 7;
        let mut state = NavbarState::default();
        state.on_menu(MenuTrigger::OpenButton);

        assert_eq!(state.on_menu(panel_click(Some(&3), &panel)), None);
        assert_eq!(state.menu, MenuState::Open);
        assert_eq!(
            state.on_menu(panel_click(Some(&7), &panel)),
            Some(MenuState::Closed)
        );
    }

    #[test]
    fn closing_twice_is_harmless() {
        let mut state = NavbarState::default();
        assert_eq!(state.on_menu(MenuTrigger::CloseButton), Some(MenuState::Closed));
        assert_eq!(state.on_menu(MenuTrigger::CloseButton), Some(MenuState::Closed));
    }
}
