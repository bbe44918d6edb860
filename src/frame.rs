use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Recurring `requestAnimationFrame` callback. Runs until [`FrameLoop::cancel`]
/// is called or the loop is dropped.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// `on_frame` receives the animation timestamp in milliseconds.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> anyhow::Result<Self> {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let cancelled_tick = cancelled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            if cancelled_tick.get() {
                return;
            }
            on_frame(now_ms);
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut(f64)>));

        let first = request_frame(&tick)
            .ok_or_else(|| anyhow::anyhow!("requestAnimationFrame unavailable"))?;
        handle.set(Some(first));
        Ok(Self {
            tick,
            handle,
            cancelled,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled.get()
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // drops the closure, breaking its reference back to `tick`
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
