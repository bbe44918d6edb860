//! Mounting and tearing down the two backdrops.
//!
//! A mounted backdrop owns its frame loop, every listener it attached and
//! (for the starfield) its `ResizeObserver`. Unmounting releases all three;
//! dropping the handle does the same.

use crate::canvas::CanvasSurface;
use crate::constants::{PARTICLE_CANVAS_STYLE, STARFIELD_CANVAS_STYLE, STARFIELD_DATA_ATTRIBUTES};
use crate::core::{ParticleNetwork, Starfield, StarfieldConfig, Surface};
use crate::dom::{self, Listeners, ResizeWatch};
use crate::events;
use crate::frame::FrameLoop;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
pub struct BackdropHandle {
    label: &'static str,
    frame: Option<FrameLoop>,
    listeners: Listeners,
    resize_watch: Option<ResizeWatch>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Stop the frame loop and detach every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        let Some(frame) = self.frame.take() else {
            return;
        };
        frame.cancel();
        let detached = self.listeners.len();
        self.listeners.remove_all();
        self.resize_watch = None;
        log::info!("[{}] unmounted ({} listeners detached)", self.label, detached);
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.frame.as_ref().is_some_and(FrameLoop::is_running)
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn window_and_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

/// Full-viewport particle network on an existing canvas.
pub fn particle_network(canvas: web::HtmlCanvasElement) -> anyhow::Result<BackdropHandle> {
    let (window, document) = window_and_document()?;
    // pinned behind the page; the backing-store sync then sets its size
    _ = canvas.set_attribute("style", PARTICLE_CANVAS_STYLE);
    let mut surface = CanvasSurface::new(canvas)?;
    let size = dom::viewport_size(&window);
    surface.resize(size);

    let engine = Rc::new(RefCell::new(ParticleNetwork::new(size, StdRng::from_entropy())));
    log::info!(
        "[particles] mounted {} particles on {:.0}x{:.0}",
        engine.borrow().particles().len(),
        size.x,
        size.y
    );

    let mut listeners = Listeners::default();
    events::wire_particle_pointer(&mut listeners, &window, &document, &engine);
    {
        let (e, w) = (engine.clone(), window.clone());
        events::wire_window_resize(&mut listeners, &window, move || {
            e.borrow_mut().request_resize(dom::viewport_size(&w));
        });
    }

    let frame_engine = engine.clone();
    let frame = FrameLoop::start(move |_now_ms| {
        frame_engine.borrow_mut().frame(&mut surface);
    })?;

    Ok(BackdropHandle {
        label: "particles",
        frame: Some(frame),
        listeners,
        resize_watch: None,
    })
}

/// Starfield filling `container`. Uses the container's first `<canvas>` child
/// or appends one.
pub fn starfield(container: web::HtmlElement, config: StarfieldConfig) -> anyhow::Result<BackdropHandle> {
    let (window, document) = window_and_document()?;
    let canvas = container_canvas(&document, &container)?;
    let mut surface = CanvasSurface::new(canvas)?;
    let size = dom::element_size(&container);
    surface.resize(size);

    let engine = Rc::new(RefCell::new(Starfield::new(size, config, StdRng::from_entropy())));
    log::info!(
        "[starfield] mounted {} stars on {:.0}x{:.0} (gap {})",
        engine.borrow().stars().len(),
        size.x,
        size.y,
        config.gap
    );

    let mut listeners = Listeners::default();
    events::wire_starfield_pointer(&mut listeners, &window, &container, &engine);
    events::wire_scroll(&mut listeners, &window, &engine);
    {
        let (e, el) = (engine.clone(), container.clone());
        events::wire_window_resize(&mut listeners, &window, move || {
            e.borrow_mut().request_resize(dom::element_size(&el));
        });
    }
    let resize_watch = {
        let (e, el) = (engine.clone(), container.clone());
        ResizeWatch::observe(&container, move || {
            e.borrow_mut().request_resize(dom::element_size(&el));
        })?
    };

    let frame_engine = engine.clone();
    let frame = FrameLoop::start(move |now_ms| {
        frame_engine.borrow_mut().frame(&mut surface, now_ms);
    })?;

    Ok(BackdropHandle {
        label: "starfield",
        frame: Some(frame),
        listeners,
        resize_watch: Some(resize_watch),
    })
}

fn container_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let existing = container
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let el = match existing {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    _ = el.set_attribute("style", STARFIELD_CANVAS_STYLE);
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("container <canvas> is not a canvas element"))
}

/// Starfield options from the container's `data-*` attributes.
pub fn config_from_attributes(el: &web::Element) -> anyhow::Result<StarfieldConfig> {
    let pairs = STARFIELD_DATA_ATTRIBUTES
        .iter()
        .filter_map(|(key, attr)| el.get_attribute(attr).map(|v| (*key, v)));
    Ok(StarfieldConfig::from_pairs(pairs)?)
}

/// Starfield options from a plain JS object such as `{ gap: 40 }`.
pub fn config_from_object(options: &js_sys::Object) -> anyhow::Result<StarfieldConfig> {
    let pairs = js_sys::Object::entries(options).iter().filter_map(|entry| {
        let pair = entry.dyn_into::<js_sys::Array>().ok()?;
        let key = pair.get(0).as_string()?;
        let value = pair.get(1);
        let value = value
            .as_f64()
            .map(|v| v.to_string())
            .or_else(|| value.as_string())?;
        Some((key, value))
    });
    Ok(StarfieldConfig::from_pairs(pairs)?)
}
