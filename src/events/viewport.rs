use crate::core::Starfield;
use crate::dom::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_window_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    mut on_resize: impl FnMut() + 'static,
) {
    listeners.add(window, "resize", move |_: web::Event| on_resize());
}

pub fn wire_scroll(listeners: &mut Listeners, window: &web::Window, engine: &Rc<RefCell<Starfield>>) {
    let (e, w) = (engine.clone(), window.clone());
    listeners.add(window, "scroll", move |_: web::Event| {
        let offset = w.scroll_y().unwrap_or(0.0) as f32;
        e.borrow_mut().scrolled(offset);
    });
}
