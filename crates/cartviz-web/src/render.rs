use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use cartviz_scene::Frame;

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// Canvas2D painter for prepared frames.
pub struct Painter {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    /// CSS pixel dimensions (logical).
    width: f64,
    height: f64,
    dpr: f64,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        let mut painter = Painter {
            ctx,
            canvas,
            width: 0.0,
            height: 0.0,
            dpr: 0.0,
        };
        painter.resize(width, height);

        web_sys::console::log_1(
            &format!("canvas2d renderer: {width}x{height} @{}x", painter.dpr).into(),
        );
        Ok(painter)
    }

    /// Size the backing store to physical pixels. Idempotent.
    pub fn resize(&mut self, width: f64, height: f64) {
        let dpr = device_pixel_ratio();
        if width == self.width && height == self.height && dpr == self.dpr {
            return;
        }
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);
        // Drawing ops use CSS pixels.
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
    }

    pub fn paint(&self, frame: &Frame) {
        self.ctx.set_fill_style_str(&frame.background.css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_line_width(0.5);
        self.ctx.set_line_join("round");
        for tri in &frame.triangles {
            let css = tri.fill.css();
            let [(x0, y0), (x1, y1), (x2, y2)] = tri.points;
            self.ctx.begin_path();
            self.ctx.move_to(x0, y0);
            self.ctx.line_to(x1, y1);
            self.ctx.line_to(x2, y2);
            self.ctx.close_path();
            self.ctx.set_fill_style_str(&css);
            self.ctx.fill();
            // Hairline in the same color hides seams between neighbours.
            self.ctx.set_stroke_style_str(&css);
            self.ctx.stroke();
        }
    }
}
