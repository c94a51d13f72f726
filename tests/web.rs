// Browser tests: paint each entity into a real 2D canvas context.
// Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use bloom_garden::color::{Hsl, Rgb};
use bloom_garden::{Butterfly, Flower, Garden, Heart};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn draws_entities_on_canvas() {
    let mut ctx = context(400, 400);
    let mut rng = StdRng::seed_from_u64(1);

    let mut flower = Flower::new(
        200.0,
        380.0,
        150.0,
        40.0,
        Hsl::new(320.0, 70, 70),
        Hsl::new(100.0, 60, 40),
        &mut rng,
    )
    .with_delay(0);
    for t in 0..100 {
        flower.update(t as f64);
    }
    flower.draw(&mut ctx);

    let heart = Heart::new(100.0, 300.0, 20.0, Rgb::new(255, 120, 170), &mut rng);
    heart.draw(&mut ctx);

    let mut butterfly = Butterfly::new(300.0, 300.0, &mut rng);
    butterfly.update(&mut rng);
    butterfly.draw(&mut ctx);
}

#[wasm_bindgen_test]
fn runs_frames_on_canvas() {
    let mut ctx = context(320, 240);
    let mut rng = StdRng::seed_from_u64(2);
    let mut garden = Garden::new(320.0, 240.0);
    garden.trigger(&mut rng);
    for frame in 0..300 {
        garden.frame(&mut ctx, frame as f64 * 16.0, &mut rng);
    }
    assert_eq!(garden.frames(), 300);
}
