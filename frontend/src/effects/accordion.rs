use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Element, HtmlElement};

use crate::config::AccordionConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneState {
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub state: PaneState,
}

/// Open/closed bookkeeping for a group of panes where at most one is open.
#[derive(Debug)]
pub struct Accordion {
    panes: Vec<PaneState>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            panes: vec![PaneState::Closed; len],
        }
    }

    /// Toggles pane `index` and returns the style changes to apply, in order.
    pub fn activate(&mut self, index: usize) -> Vec<Transition> {
        let Some(current) = self.panes.get(index).copied() else {
            return Vec::new();
        };

        if current == PaneState::Open {
            self.panes[index] = PaneState::Closed;
            return vec![Transition {
                index,
                state: PaneState::Closed,
            }];
        }

        let mut transitions = Vec::with_capacity(self.panes.len());
        for (other, state) in self.panes.iter_mut().enumerate() {
            if other != index {
                *state = PaneState::Closed;
                transitions.push(Transition {
                    index: other,
                    state: PaneState::Closed,
                });
            }
        }
        self.panes[index] = PaneState::Open;
        transitions.push(Transition {
            index,
            state: PaneState::Open,
        });
        transitions
    }

    pub fn state(&self, index: usize) -> Option<PaneState> {
        self.panes.get(index).copied()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.panes.iter().position(|s| *s == PaneState::Open)
    }

    pub fn open_count(&self) -> usize {
        self.panes.iter().filter(|s| **s == PaneState::Open).count()
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }
}

struct Pane {
    answer: HtmlElement,
    icon: HtmlElement,
}

impl Pane {
    fn find(item: &Element, config: &AccordionConfig) -> Result<(HtmlElement, Self)> {
        let question = dom::query_in(item, &config.question_selector)?;
        let answer = dom::query_in(item, &config.answer_selector)?;
        let icon = dom::query_in(item, &config.icon_selector)?;
        Ok((question, Self { answer, icon }))
    }

    fn apply(&self, state: PaneState, config: &AccordionConfig) -> Result<()> {
        let (max_height, padding_top, padding_bottom, rotation) = match state {
            PaneState::Open => (
                config.open_max_height.as_str(),
                config.open_padding_top.as_str(),
                config.open_padding_bottom.as_str(),
                "rotate(180deg)",
            ),
            PaneState::Closed => ("0", "0", "0", "rotate(0deg)"),
        };
        dom::set_styles(
            &self.answer,
            &[
                ("max-height", max_height),
                ("padding-top", padding_top),
                ("padding-bottom", padding_bottom),
            ],
        )?;
        dom::set_styles(&self.icon, &[("transform", rotation)])
    }
}

/// FAQ accordion bound to `.faq-item` panes.
pub struct AccordionWidget {
    _listeners: Vec<Listener>,
}

impl AccordionWidget {
    pub fn install(document: &Document, config: &AccordionConfig) -> Result<Self> {
        let mut questions = Vec::new();
        let mut panes = Vec::new();
        for item in dom::query_all(document, &config.item_selector)? {
            match Pane::find(&item, config) {
                Ok((question, pane)) => {
                    questions.push(question);
                    panes.push(pane);
                }
                Err(e) => warn!("Skipping FAQ item: {}", e),
            }
        }

        let state = Rc::new(RefCell::new(Accordion::new(panes.len())));
        let panes = Rc::new(panes);
        let config = Rc::new(config.clone());

        let mut listeners = Vec::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            let state = state.clone();
            let panes = panes.clone();
            let config = config.clone();
            listeners.push(Listener::new(question, "click", move |_| {
                let transitions = state.borrow_mut().activate(index);
                for transition in transitions {
                    if let Err(e) = panes[transition.index].apply(transition.state, &config) {
                        warn!("Could not restyle FAQ item {}: {}", transition.index, e);
                    }
                }
                debug!("FAQ open pane: {:?}", state.borrow().open_index());
            })?);
        }
        info!("FAQ accordion ready with {} items", panes.len());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(index: usize) -> Transition {
        Transition {
            index,
            state: PaneState::Closed,
        }
    }

    fn opened(index: usize) -> Transition {
        Transition {
            index,
            state: PaneState::Open,
        }
    }

    #[test]
    fn starts_all_closed() {
        let accordion = Accordion::new(3);
        assert_eq!(accordion.open_count(), 0);
        assert_eq!(accordion.open_index(), None);
        assert_eq!(accordion.len(), 3);
        assert!(!accordion.is_empty());
        assert!(Accordion::new(0).is_empty());
    }

    #[test]
    fn opening_closes_siblings_first() {
        let mut accordion = Accordion::new(3);
        assert_eq!(
            accordion.activate(1),
            vec![closed(0), closed(2), opened(1)]
        );
        assert_eq!(accordion.state(1), Some(PaneState::Open));
    }

    #[test]
    fn switching_panes_moves_the_open_slot() {
        let mut accordion = Accordion::new(3);
        accordion.activate(0);
        accordion.activate(2);
        assert_eq!(accordion.open_index(), Some(2));
        assert_eq!(accordion.state(0), Some(PaneState::Closed));
    }

    #[test]
    fn reactivating_open_pane_closes_everything() {
        let mut accordion = Accordion::new(3);
        accordion.activate(2);
        assert_eq!(accordion.activate(2), vec![closed(2)]);
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.activate(0);
        assert!(accordion.activate(5).is_empty());
        assert_eq!(accordion.open_index(), Some(0));
        assert!(Accordion::new(0).activate(0).is_empty());
    }

    #[test]
    fn at_most_one_open_for_any_sequence() {
        let mut accordion = Accordion::new(4);
        let sequence = [0, 1, 1, 3, 2, 2, 2, 0, 3, 3, 1, 0, 0, 4, 2];
        for index in sequence {
            accordion.activate(index);
            assert!(accordion.open_count() <= 1, "after activating {}", index);
        }
    }

    #[test]
    fn single_pane_toggles() {
        let mut accordion = Accordion::new(1);
        assert_eq!(accordion.activate(0), vec![opened(0)]);
        assert_eq!(accordion.activate(0), vec![closed(0)]);
        assert_eq!(accordion.activate(0), vec![opened(0)]);
    }
}
