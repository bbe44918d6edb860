use crate::core::{ParticleNetwork, Starfield};
use crate::dom::{self, Listeners};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

/// Mouse and touch feed the network's pointer in raw viewport pixels; leaving
/// the page or lifting the finger deactivates it.
pub fn wire_particle_pointer(
    listeners: &mut Listeners,
    window: &web::Window,
    document: &web::Document,
    engine: &Rc<RefCell<ParticleNetwork>>,
) {
    let e = engine.clone();
    listeners.add(window, "mousemove", move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        e.borrow_mut().pointer_moved(pos);
    });

    for name in ["touchstart", "touchmove"] {
        let e = engine.clone();
        listeners.add_passive(window, name, move |ev: web::TouchEvent| {
            if let Some((x, y)) = first_touch(&ev) {
                e.borrow_mut().pointer_moved(Vec2::new(x as f32, y as f32));
            }
        });
    }

    match document.body() {
        Some(body) => {
            let e = engine.clone();
            listeners.add(&body, "mouseleave", move |_: web::MouseEvent| {
                e.borrow_mut().pointer_left();
            });
        }
        None => log::warn!("[particles] no <body>; pointer will not deactivate on leave"),
    }

    let e = engine.clone();
    listeners.add_passive(window, "touchend", move |_: web::TouchEvent| {
        e.borrow_mut().pointer_left();
    });
}

/// Mouse and touch feed the starfield's parallax, normalised against the
/// container box at the time of the event.
pub fn wire_starfield_pointer(
    listeners: &mut Listeners,
    window: &web::Window,
    container: &web::Element,
    engine: &Rc<RefCell<Starfield>>,
) {
    let (e, el) = (engine.clone(), container.clone());
    listeners.add(window, "mousemove", move |ev: web::MouseEvent| {
        let local = dom::element_local(&el, ev.client_x() as f64, ev.client_y() as f64);
        e.borrow_mut().pointer_moved(local, dom::element_size(&el));
    });

    for name in ["touchstart", "touchmove"] {
        let (e, el) = (engine.clone(), container.clone());
        listeners.add_passive(window, name, move |ev: web::TouchEvent| {
            if let Some((x, y)) = first_touch(&ev) {
                let local = dom::element_local(&el, x, y);
                e.borrow_mut().pointer_moved(local, dom::element_size(&el));
            }
        });
    }
}
