use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::MomentumConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

/// A trailing scroll offset that eases toward the real one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumScroll {
    current: f64,
    target: f64,
    easing: f64,
    snap_distance: f64,
}

impl MomentumScroll {
    pub fn new(offset: f64, config: &MomentumConfig) -> Self {
        Self {
            current: offset,
            target: offset,
            easing: config.easing,
            snap_distance: config.snap_distance,
        }
    }

    pub fn set_target(&mut self, offset: f64) {
        self.target = offset;
    }

    /// Advances one frame and returns the new current offset.
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.easing;
        if (self.target - self.current).abs() < self.snap_distance {
            self.current = self.target;
        }
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Steps a [`MomentumScroll`] on every animation frame until dropped.
pub struct MomentumLoop {
    state: Rc<RefCell<MomentumScroll>>,
    running: Rc<Cell<bool>>,
    _scroll: Listener,
}

impl MomentumLoop {
    pub fn install(window: &Window, config: &MomentumConfig) -> Result<Self> {
        let state = Rc::new(RefCell::new(MomentumScroll::new(dom::scroll_y(window), config)));
        let running = Rc::new(Cell::new(true));

        let scroll = {
            let state = state.clone();
            let win = window.clone();
            Listener::new(window, "scroll", move |_| {
                state.borrow_mut().set_target(dom::scroll_y(&win));
            })?
        };

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        {
            let next = frame.clone();
            let state = state.clone();
            let running = running.clone();
            let win = window.clone();
            *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                if !running.get() {
                    // Drop the closure's reference to itself so it can be freed.
                    let _ = next.borrow_mut().take();
                    return;
                }
                state.borrow_mut().step();
                request_frame(&win, &next);
            }));
        }
        request_frame(window, &frame);
        info!("Momentum scroll loop started");

        Ok(Self {
            state,
            running,
            _scroll: scroll,
        })
    }

    pub fn current(&self) -> f64 {
        self.state.borrow().current()
    }
}

impl Drop for MomentumLoop {
    fn drop(&mut self) {
        self.running.set(false);
    }
}

fn request_frame(window: &Window, frame: &FrameCallback) {
    if let Some(callback) = frame.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            warn!("Momentum scroll could not schedule a frame: {:?}", e);
        }
    }
}
