/// Strokes Web - WASM driver that blits the slide deck onto an HTML canvas
///
/// Shapes are rasterized into an RGBA framebuffer on the Rust side and copied
/// to a 2D canvas context once per `render()` call. The page owns the frame
/// loop and forwards pointer and key input.
use strokes_core::{CanvasConfig, Config, Framebuffer, Point2, Scene};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    framebuffer: Framebuffer,
    pointer: Point2,
    context: Option<CanvasRenderingContext2d>,
}

#[wasm_bindgen]
impl WebRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<WebRenderer, JsValue> {
        let config = Config {
            canvas: CanvasConfig { width, height },
            ..Config::default()
        };
        config.validate().map_err(to_js)?;

        Ok(WebRenderer {
            framebuffer: Framebuffer::new(width, height).map_err(to_js)?,
            pointer: config.canvas.center(),
            scene: Scene::new(config),
            context: None,
        })
    }

    /// Initialize the renderer with a canvas element
    pub fn init(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
            .dyn_into()?;
        canvas.set_width(self.framebuffer.width());
        canvas.set_height(self.framebuffer.height());

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        self.context = Some(context);
        Ok(())
    }

    /// Render a frame
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.draw_frame()?;

        let Some(context) = &self.context else {
            return Err(JsValue::from_str("render() called before init()"));
        };
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.framebuffer.pixels()),
            self.framebuffer.width(),
            self.framebuffer.height(),
        )?;
        context.put_image_data(&image, 0.0, 0.0)
    }

    /// Raw RGBA bytes of the last frame, for pages that blit themselves
    pub fn pixels(&self) -> Vec<u8> {
        self.framebuffer.pixels().to_vec()
    }

    pub fn next_slide(&mut self) {
        self.scene.next_slide();
    }

    pub fn previous_slide(&mut self) {
        self.scene.previous_slide();
    }

    pub fn slide_index(&self) -> usize {
        self.scene.slide().index()
    }

    pub fn slide_title(&self) -> String {
        self.scene.slide().title().to_string()
    }

    /// Pointer position in canvas pixels
    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.pointer = Point2::new(x, y);
    }
}

impl WebRenderer {
    /// Clear and redraw the current slide into the framebuffer
    fn draw_frame(&mut self) -> Result<(), JsValue> {
        self.framebuffer.clear(self.scene.config().background);
        self.scene
            .draw(&mut self.framebuffer, self.pointer)
            .map_err(to_js)
    }
}

fn to_js(err: strokes_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// Export the default instance
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    web_sys::console::log_1(&JsValue::from_str("strokes-web loaded"));
    Ok(())
}
