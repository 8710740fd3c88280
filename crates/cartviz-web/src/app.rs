//! Widget lifecycle: mount wires listeners, the asset load and the render
//! loop; unmount drops them all.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use cartviz_scene::{CartpoleGeometry, SceneGraph, build_frame};

use crate::asset;
use crate::config::Config;
use crate::dom;
use crate::listener::EventListener;
use crate::render::Painter;
use crate::visualizer::Visualizer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct App {
    visualizer: Rc<RefCell<Visualizer>>,
    // Held for their Drop: removing them unregisters the handlers.
    _listeners: Vec<EventListener>,
    frame_cb: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    // Dropped after the loop is stopped; removes the canvas from the page.
    _canvas: dom::MountedCanvas,
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            dom::cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.frame_cb.borrow_mut().take();

        let (accepted, dropped) = self.visualizer.borrow().counts();
        web_sys::console::log_1(
            &format!("cartviz unmounted ({accepted} updates applied, {dropped} dropped)").into(),
        );
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

pub fn mount() {
    match App::mount() {
        Ok(app) => APP.with(|a| *a.borrow_mut() = Some(app)),
        Err(e) => web_sys::console::error_1(&format!("cartviz mount failed: {e}").into()),
    }
}

pub fn unmount() {
    // Take first so App::drop runs without the thread-local borrowed.
    let app = APP.with(|a| a.borrow_mut().take());
    drop(app);
}

impl App {
    fn mount() -> Result<Self, String> {
        let config = Config::from_location();
        web_sys::console::log_1(
            &format!("cartviz starting (theme {})", config.theme.as_str()).into(),
        );

        let visualizer = Rc::new(RefCell::new(Visualizer::new(&config)));
        let scene = Rc::new(RefCell::new(SceneGraph::new(CartpoleGeometry::default())));

        let (width, height) = dom::window_size();
        let canvas = dom::mount_canvas()?;
        let painter = Rc::new(RefCell::new(Painter::new(canvas.element(), width, height)?));

        let window = dom::window();
        let mut listeners = Vec::new();

        let vis = visualizer.clone();
        let debug = config.debug;
        listeners.push(
            EventListener::new(&window, "message", move |evt| {
                let Some(payload) = evt
                    .dyn_ref::<MessageEvent>()
                    .and_then(|m| m.data().as_string())
                else {
                    return;
                };
                if let Err(e) = vis.borrow_mut().receive_message(&payload) {
                    if debug {
                        web_sys::console::debug_1(&format!("dropped message: {e}").into());
                    }
                }
            })
            .map_err(|e| format!("{e:?}"))?,
        );

        let sc = scene.clone();
        let p = painter.clone();
        listeners.push(
            EventListener::new(&window, "resize", move |_| {
                let (w, h) = dom::window_size();
                sc.borrow_mut().resize(w, h);
                p.borrow_mut().resize(w, h);
            })
            .map_err(|e| format!("{e:?}"))?,
        );

        spawn_asset_load(config.wheel_url.clone(), scene.clone());

        let (frame_cb, frame_id) = start_render_loop(visualizer.clone(), scene, painter);

        Ok(App {
            visualizer,
            _listeners: listeners,
            frame_cb,
            frame_id,
            _canvas: canvas,
        })
    }
}

/// The wheel asset is the only suspension point. Until it lands the scene has
/// no rig and frames are skipped; a failed load leaves it that way.
fn spawn_asset_load(url: String, scene: Rc<RefCell<SceneGraph>>) {
    wasm_bindgen_futures::spawn_local(async move {
        match asset::load_wheel(&url).await {
            Ok(wheel) => {
                let triangles = wheel.triangle_count();
                let (w, h) = dom::window_size();
                scene.borrow_mut().attach_rig(wheel, w, h);
                web_sys::console::log_1(
                    &format!("wheel asset loaded: {triangles} triangles").into(),
                );
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("wheel asset: {e}").into());
            }
        }
    });
}

fn start_render_loop(
    visualizer: Rc<RefCell<Visualizer>>,
    scene: Rc<RefCell<SceneGraph>>,
    painter: Rc<RefCell<Painter>>,
) -> (FrameCallback, Rc<Cell<Option<i32>>>) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let id = frame_id.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let vis = visualizer.borrow();
            let mut scene = scene.borrow_mut();
            if scene.apply(vis.model(), vis.theme()) {
                if let Some(frame) = build_frame(&scene) {
                    painter.borrow().paint(&frame);
                }
            }
        }

        // Request next frame
        if let Some(cb) = f.borrow().as_ref() {
            id.set(dom::request_animation_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        frame_id.set(dom::request_animation_frame(cb));
    }
    (g, frame_id)
}
