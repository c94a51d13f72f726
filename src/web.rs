//! Browser host: binds a [`Garden`] to a page's canvas, keeps the canvas sized
//! to the window, starts the garden on the trigger click and drives it from
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window, window};

use crate::config::GardenConfig;
use crate::error::GardenError;
use crate::garden::Garden;

struct GardenApp {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    garden: Garden,
    rng: StdRng,
}

thread_local! {
    static GARDEN_APP: RefCell<Option<GardenApp>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn mount(config: GardenConfig) -> Result<(), GardenError> {
    if let Some(level) = config.level_filter() {
        log::set_max_level(level);
    }
    if GARDEN_APP.with(|cell| cell.borrow().is_some()) {
        log::warn!("garden already mounted; ignoring");
        return Ok(());
    }

    let win = window().ok_or(GardenError::NoWindow)?;
    let doc = win.document().ok_or(GardenError::NoDocument)?;

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| GardenError::MissingElement(config.canvas_id.clone()))?
        .dyn_into()
        .map_err(|_| GardenError::NotCanvas(config.canvas_id.clone()))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GardenError::NoContext)?
        .dyn_into()
        .map_err(|_| GardenError::NoContext)?;
    let trigger = doc
        .get_element_by_id(&config.trigger_id)
        .ok_or_else(|| GardenError::MissingElement(config.trigger_id.clone()))?;

    // Size once up front so the first frame never sees a 0x0 surface
    let (width, height) = fit_to_window(&win, &canvas);
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    GARDEN_APP.with(|cell| {
        cell.replace(Some(GardenApp {
            canvas: canvas.clone(),
            ctx,
            garden: Garden::new(width, height),
            rng,
        }))
    });

    // Resizing clears the canvas; the next frame repaints it
    {
        let closure = Closure::wrap(Box::new(move || {
            let Some(win) = window() else {
                return;
            };
            GARDEN_APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    let (w, h) = fit_to_window(&win, &app.canvas);
                    app.garden.resize(w, h);
                }
            });
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let started = GARDEN_APP.with(|cell| {
                cell.borrow_mut()
                    .as_mut()
                    .map(|app| app.garden.trigger(&mut app.rng))
                    .unwrap_or(false)
            });
            if started {
                start_garden_loop();
            }
        }) as Box<dyn FnMut(_)>);
        trigger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    log::info!(
        "garden mounted on #{} ({}x{}), waiting for #{}",
        config.canvas_id,
        width,
        height,
        config.trigger_id
    );
    Ok(())
}

/// Whether the mounted garden has been triggered.
#[wasm_bindgen]
pub fn is_garden_running() -> bool {
    GARDEN_APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|app| app.garden.is_running())
            .unwrap_or(false)
    })
}

fn fit_to_window(win: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(px(win.inner_width()) as u32);
    canvas.set_height(px(win.inner_height()) as u32);
    (canvas.width() as f64, canvas.height() as f64)
}

fn start_garden_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GARDEN_APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.garden.frame(&mut app.ctx, ts, &mut app.rng);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    let Some(win) = window() else {
        return;
    };
    if let Some(closure) = callback.borrow().as_ref() {
        if let Err(e) = win.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
    }
}
