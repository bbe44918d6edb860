use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0)
}

/// Inner size of the browser viewport in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Laid-out size of an element in CSS pixels.
pub fn element_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Client coordinates relative to the element's top-left corner.
pub fn element_local(el: &web::Element, client_x: f64, client_y: f64) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new((client_x - rect.left()) as f32, (client_y - rect.top()) as f32)
}

/// Set the canvas backing store to `css_size * dpr` and pin its CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_size: Vec2, dpr: f64) {
    let w_px = (css_size.x as f64 * dpr).floor() as u32;
    let h_px = (css_size.y as f64 * dpr).floor() as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_size.x));
    _ = style.set_property("height", &format!("{}px", css_size.y));
}

struct Attached {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by one mounted backdrop; all detached on drop.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<Attached>,
}

impl Listeners {
    pub fn add<E>(&mut self, target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static)
    where
        E: JsCast + 'static,
    {
        self.attach(target, event, false, handler);
    }

    /// Same as [`Listeners::add`] but registered as passive (touch events).
    pub fn add_passive<E>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        self.attach(target, event, true, handler);
    }

    fn attach<E>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        // the event name already tells us the concrete type
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);

        let res = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        } else {
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        };

        match res {
            Ok(()) => self.attached.push(Attached {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => log::warn!("[dom] could not listen for {}: {:?}", event, e),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn remove_all(&mut self) {
        for a in self.attached.drain(..) {
            _ = a
                .target
                .remove_event_listener_with_callback(a.event, a.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// A `ResizeObserver` watching one element; disconnected on drop.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe(el: &web::Element, mut on_resize: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            on_resize();
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
        observer.observe(el);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
