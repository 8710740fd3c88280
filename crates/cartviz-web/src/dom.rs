use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

/// Inner window size in CSS pixels.
pub fn window_size() -> (f64, f64) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width, height)
}

/// The widget's canvas, attached to the page. Dropping it detaches the element.
pub struct MountedCanvas {
    canvas: HtmlCanvasElement,
}

impl MountedCanvas {
    pub fn element(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }
}

impl Drop for MountedCanvas {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

/// Create the drawing canvas inside `#root` (or `<body>` when absent).
pub fn mount_canvas() -> Result<MountedCanvas, String> {
    let doc = document();
    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "not a canvas".to_string())?;
    canvas
        .set_attribute("style", "display:block;width:100vw;height:100vh")
        .ok();

    let parent = match doc.get_element_by_id("root") {
        Some(el) => el,
        None => doc.body().ok_or("no body")?.into(),
    };
    parent
        .append_child(&canvas)
        .map_err(|e| format!("{e:?}"))?;
    Ok(MountedCanvas { canvas })
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Option<i32> {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .ok()
}

pub fn cancel_animation_frame(id: i32) {
    window().cancel_animation_frame(id).ok();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas_count() -> u32 {
        document().get_elements_by_tag_name("canvas").length()
    }

    #[wasm_bindgen_test]
    fn dropping_the_mount_detaches_the_canvas() {
        let before = canvas_count();
        let mounted = mount_canvas().unwrap();
        assert_eq!(canvas_count(), before + 1);
        assert!(mounted.element().is_connected());

        let element = mounted.element();
        drop(mounted);
        assert_eq!(canvas_count(), before);
        assert!(!element.is_connected());
    }
}
