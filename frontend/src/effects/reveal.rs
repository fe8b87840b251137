use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::RevealConfig;
use crate::dom;
use crate::error::Result;

const OVERSHOOT: &str = "all 0.6s cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Entrance animation picked by the element's variant label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    FadeUp,
    FadeDown,
    FadeIn,
    Rise,
}

impl Variant {
    /// Unknown or missing labels get the plain rise.
    pub fn parse(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("fade-up") => Variant::FadeUp,
            Some("fade-down") => Variant::FadeDown,
            Some("fade-in") => Variant::FadeIn,
            _ => Variant::Rise,
        }
    }

    pub fn start(self) -> Keyframe {
        let transform = match self {
            Variant::FadeUp => Some("translateY(50px)"),
            Variant::FadeDown => Some("translateY(-50px)"),
            Variant::FadeIn => None,
            Variant::Rise => Some("translateY(30px)"),
        };
        Keyframe {
            transition: None,
            opacity: "0",
            transform,
        }
    }

    pub fn end(self) -> Keyframe {
        match self {
            Variant::FadeIn => Keyframe {
                transition: Some("opacity 0.5s ease-in-out"),
                opacity: "1",
                transform: None,
            },
            _ => Keyframe {
                transition: Some(OVERSHOOT),
                opacity: "1",
                transform: Some("translateY(0)"),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub transition: Option<&'static str>,
    pub opacity: &'static str,
    pub transform: Option<&'static str>,
}

impl Keyframe {
    /// Inline style writes, transition first so it is in place before the values change.
    pub fn properties(&self) -> Vec<(&'static str, &'static str)> {
        let mut props = Vec::with_capacity(3);
        if let Some(transition) = self.transition {
            props.push(("transition", transition));
        }
        props.push(("opacity", self.opacity));
        if let Some(transform) = self.transform {
            props.push(("transform", transform));
        }
        props
    }
}

/// Milliseconds to wait before animating. Anything unusable means no wait.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    Animated,
}

/// Per-element lifecycle, indexed like the observed elements.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![RevealState::Unobserved; len],
        }
    }

    pub fn observe(&mut self, index: usize) {
        if let Some(state @ RevealState::Unobserved) = self.states.get_mut(index) {
            *state = RevealState::Observed;
        }
    }

    /// Returns true exactly once per element: on its first intersecting entry.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Observed) if is_intersecting => {
                *state = RevealState::Animated;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn animated(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Animated)
            .count()
    }
}

/// Scroll-triggered entrance animations for `[data-animate]` elements.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn install(document: &Document, config: &RevealConfig) -> Result<Self> {
        let elements = dom::query_all(document, &config.selector)?;
        let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));

        let callback = {
            let tracker = tracker.clone();
            let targets = elements.clone();
            let config = config.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let Some(index) = targets.iter().position(|el| el == &target) else {
                            continue;
                        };
                        if !tracker.borrow_mut().on_intersect(index, entry.is_intersecting()) {
                            continue;
                        }
                        observer.unobserve(&target);
                        debug!("Revealing element {}", index);
                        schedule(target, &config);
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for (index, element) in elements.iter().enumerate() {
            observer.observe(element);
            tracker.borrow_mut().observe(index);
        }
        info!("Watching {} animated elements", elements.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn schedule(element: Element, config: &RevealConfig) {
    let variant = Variant::parse(element.get_attribute(&config.variant_attribute).as_deref());
    let delay = parse_delay(element.get_attribute(&config.delay_attribute).as_deref());
    let Ok(element) = element.dyn_into::<HtmlElement>() else {
        warn!("Skipping animation on a non-HTML element");
        return;
    };

    let animated_class = config.animated_class.clone();
    Timeout::new(delay, move || {
        if let Err(e) = animate(&element, variant, &animated_class) {
            warn!("Entrance animation failed: {}", e);
        }
    })
    .forget();
}

fn animate(element: &HtmlElement, variant: Variant, animated_class: &str) -> Result<()> {
    element.class_list().add_1(animated_class)?;
    dom::set_styles(element, &variant.start().properties())?;

    // End state goes on the next frame so the browser sees a transition, not a jump.
    let element = element.clone();
    let end = Closure::once_into_js(move || {
        if let Err(e) = dom::set_styles(&element, &variant.end().properties()) {
            warn!("Entrance animation failed: {}", e);
        }
    });
    dom::window()?.request_animation_frame(end.unchecked_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(Variant::parse(Some("fade-up")), Variant::FadeUp);
        assert_eq!(Variant::parse(Some("fade-down")), Variant::FadeDown);
        assert_eq!(Variant::parse(Some("fade-in")), Variant::FadeIn);
    }

    #[test]
    fn unknown_or_missing_label_rises() {
        assert_eq!(Variant::parse(Some("zoom")), Variant::Rise);
        assert_eq!(Variant::parse(Some("")), Variant::Rise);
        assert_eq!(Variant::parse(None), Variant::Rise);
    }

    #[test]
    fn fade_up_and_down_mirror_each_other() {
        assert_eq!(Variant::FadeUp.start().transform, Some("translateY(50px)"));
        assert_eq!(Variant::FadeDown.start().transform, Some("translateY(-50px)"));
        assert_eq!(Variant::FadeUp.end(), Variant::FadeDown.end());
        assert_eq!(Variant::FadeUp.end().transition, Some(OVERSHOOT));
    }

    #[test]
    fn fade_in_touches_only_opacity() {
        assert_eq!(Variant::FadeIn.start().properties(), vec![("opacity", "0")]);
        assert_eq!(
            Variant::FadeIn.end().properties(),
            vec![("transition", "opacity 0.5s ease-in-out"), ("opacity", "1")]
        );
    }

    #[test]
    fn rise_uses_shorter_offset_with_overshoot() {
        assert_eq!(
            Variant::Rise.start().properties(),
            vec![("opacity", "0"), ("transform", "translateY(30px)")]
        );
        assert_eq!(
            Variant::Rise.end().properties(),
            vec![
                ("transition", OVERSHOOT),
                ("opacity", "1"),
                ("transform", "translateY(0)"),
            ]
        );
    }

    #[test]
    fn delay_defaults_to_zero() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("")), 0);
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(Some("-200")), 0);
        assert_eq!(parse_delay(Some("NaN")), 0);
    }

    #[test]
    fn delay_reads_milliseconds() {
        assert_eq!(parse_delay(Some("200")), 200);
        assert_eq!(parse_delay(Some(" 150 ")), 150);
        assert_eq!(parse_delay(Some("99.9")), 99);
    }

    #[test]
    fn fires_once_per_element() {
        let mut tracker = RevealTracker::new(2);
        tracker.observe(0);
        tracker.observe(1);

        assert!(tracker.on_intersect(0, true));
        assert!(!tracker.on_intersect(0, true));
        assert_eq!(tracker.state(0), Some(RevealState::Animated));
        assert_eq!(tracker.state(1), Some(RevealState::Observed));
        assert_eq!(tracker.animated(), 1);
    }

    #[test]
    fn non_intersecting_entries_do_not_fire() {
        let mut tracker = RevealTracker::new(1);
        tracker.observe(0);
        assert!(!tracker.on_intersect(0, false));
        assert_eq!(tracker.state(0), Some(RevealState::Observed));
        assert!(tracker.on_intersect(0, true));
    }

    #[test]
    fn unobserved_and_unknown_elements_never_fire() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.on_intersect(0, true));
        assert!(!tracker.on_intersect(7, true));
        assert_eq!(tracker.state(7), None);
    }

    #[test]
    fn animated_elements_are_not_rearmed() {
        let mut tracker = RevealTracker::new(1);
        tracker.observe(0);
        assert!(tracker.on_intersect(0, true));
        tracker.observe(0);
        assert_eq!(tracker.state(0), Some(RevealState::Animated));
        assert!(!tracker.on_intersect(0, true));
    }
}
