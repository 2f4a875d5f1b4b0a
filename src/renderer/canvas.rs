//! Canvas 2D renderer for the browser build

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Renderer, hud_score, hud_speed};
use crate::sim::{Aabb, Phase, Snapshot};

const BACKGROUND: &str = "#1a1a1a";
const GROUND: &str = "#222";
const FLOOR_LINE: &str = "#555";
const CRATE_FILL: &str = "#95a5a6";
const CRATE_EDGE: &str = "#2c3e50";
const SCROLL_FILL: &str = "#FFD700";
const HEN_BODY: &str = "#D35400";
const HEN_BEAK: &str = "#F1C40F";
const HEN_WING: &str = "#A04000";
const HUD_TEXT: &str = "rgba(255, 255, 255, 0.8)";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { ctx })
    }

    fn fill(&self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_ground(&self, snapshot: &Snapshot) {
        let width = snapshot.playfield.width as f64;
        let floor_y = snapshot.floor_y as f64;

        self.fill(
            GROUND,
            0.0,
            snapshot.floor_y,
            snapshot.playfield.width,
            snapshot.playfield.ground_height,
        );
        self.ctx.set_stroke_style_str(FLOOR_LINE);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(0.0, floor_y);
        self.ctx.line_to(width, floor_y);
        self.ctx.stroke();
    }

    fn draw_crate(&self, aabb: &Aabb) {
        let (x, y) = (aabb.pos.x as f64, aabb.pos.y as f64);
        let (w, h) = (aabb.size.x as f64, aabb.size.y as f64);

        self.fill(CRATE_FILL, aabb.pos.x, aabb.pos.y, aabb.size.x, aabb.size.y);
        self.ctx.set_stroke_style_str(CRATE_EDGE);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke_rect(x, y, w, h);

        // Slats at thirds
        self.ctx.begin_path();
        for slat in [w / 3.0, w * 2.0 / 3.0] {
            self.ctx.move_to(x + slat, y);
            self.ctx.line_to(x + slat, y + h);
        }
        self.ctx.stroke();
    }

    fn draw_scroll(&self, aabb: &Aabb) {
        self.fill(SCROLL_FILL, aabb.pos.x, aabb.pos.y, aabb.size.x, aabb.size.y);
        self.ctx.set_fill_style_str("#000");
        self.ctx.set_font("20px Courier");
        self.ctx.set_text_align("left");
        let _ = self.ctx.fill_text(
            "?",
            (aabb.pos.x + aabb.size.x * 0.27) as f64,
            (aabb.pos.y + aabb.size.y * 0.73) as f64,
        );
    }

    fn draw_hen(&self, aabb: &Aabb) {
        let (x, y) = (aabb.pos.x, aabb.pos.y);
        let s = aabb.size.x / 40.0;

        self.fill(HEN_BODY, x, y, aabb.size.x, aabb.size.y);
        self.fill(HEN_BEAK, x + 30.0 * s, y + 10.0 * s, 15.0 * s, 10.0 * s);
        self.fill("#000", x + 25.0 * s, y + 5.0 * s, 5.0 * s, 5.0 * s);
        self.fill(HEN_WING, x + 10.0 * s, y + 20.0 * s, 20.0 * s, 10.0 * s);
    }

    fn draw_hud(&self, snapshot: &Snapshot) {
        let width = snapshot.playfield.width as f64;

        self.ctx.set_fill_style_str(HUD_TEXT);
        self.ctx.set_font("16px Courier");
        self.ctx.set_text_align("left");
        let _ = self.ctx.fill_text(&hud_score(snapshot.score), 10.0, 30.0);

        self.ctx.set_text_align("right");
        let _ = self.ctx.fill_text(&hud_speed(snapshot.speed), width - 10.0, 30.0);

        if snapshot.has_collectible {
            self.ctx.set_font("24px serif");
            let _ = self.ctx.fill_text("\u{1F4DC}", width - 140.0, 30.0);
        }
        self.ctx.set_text_align("left");
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let pf = &snapshot.playfield;
        self.ctx
            .clear_rect(0.0, 0.0, pf.width as f64, pf.height as f64);
        self.fill(BACKGROUND, 0.0, 0.0, pf.width, pf.height);

        self.draw_ground(snapshot);
        for obstacle in &snapshot.obstacles {
            self.draw_crate(obstacle);
        }
        if let Some(scroll) = &snapshot.collectible {
            self.draw_scroll(scroll);
        }
        self.draw_hen(&snapshot.player);

        if snapshot.phase != Phase::NotStarted {
            self.draw_hud(snapshot);
        }
    }
}
