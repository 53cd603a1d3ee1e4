//! Canvas 2D painter for the core sprite list.
//!
//! Every sprite is drawn in its own `save`/`restore` pair, translated to its
//! screen origin and rotated unless the shape is upright. Image ornaments
//! whose image is not loaded yet are skipped for the frame.

use glam::Vec2;
use std::f64::consts::{PI, TAU};
use tree_core::render::{
    cane_hook, foliage_outline, gift_rects, image_rects, star_outline, Rect, CANE_LINE_WIDTH,
    IMAGE_GLOW_BLUR, RING_LINE_WIDTH, STAR_GLOW_BLUR, STAR_HALO_RADIUS,
};
use tree_core::{ImageSlots, Rgb, Shape, Sprite, Viewport, BACKGROUND};
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{
    IMAGE_FRAME, IMAGE_GLOW_ALPHA, STAR_EDGE, STAR_EDGE_ALPHA, STAR_GRADIENT_INNER, STAR_HALO,
    STAR_HALO_ALPHA, STAR_MID, STAR_MID_STOP,
};

type Images = ImageSlots<web::HtmlImageElement>;

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    background: String,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            background: BACKGROUND.to_string(),
        }
    }

    /// Full overwrite with the background, then every sprite in order.
    pub fn paint(&self, sprites: &[Sprite], images: &Images, viewport: Viewport) {
        self.ctx.set_fill_style_str(&self.background);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        for sprite in sprites {
            if let Err(e) = self.draw(sprite, images) {
                log::warn!("[render] sprite draw failed: {:?}", e);
            }
        }
    }

    fn draw(&self, sprite: &Sprite, images: &Images) -> Result<(), JsValue> {
        let image = match sprite.shape {
            Shape::Image { image } => match images.loaded(image) {
                Some(img) => Some(img),
                None => return Ok(()),
            },
            _ => None,
        };
        self.ctx.save();
        let result = self.draw_local(sprite, image);
        self.ctx.restore();
        result
    }

    fn draw_local(
        &self,
        sprite: &Sprite,
        image: Option<&web::HtmlImageElement>,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.translate(sprite.origin.x as f64, sprite.origin.y as f64)?;
        if sprite.rotation != 0.0 {
            ctx.rotate(sprite.rotation as f64)?;
        }
        let s = sprite.size;
        match sprite.shape {
            Shape::Foliage { color } => {
                ctx.set_fill_style_str(&color.to_string());
                trace(ctx, &foliage_outline(s));
                ctx.fill();
            }
            Shape::Gift { color, ribbon } => {
                let (body, vertical, horizontal) = gift_rects(s);
                ctx.set_fill_style_str(&color.to_string());
                fill_rect(ctx, body);
                ctx.set_fill_style_str(&ribbon.to_string());
                fill_rect(ctx, vertical);
                fill_rect(ctx, horizontal);
            }
            Shape::CandyCane { color } => {
                let (center, r, end) = cane_hook(s);
                ctx.set_stroke_style_str(&color.to_string());
                ctx.set_line_width((s * CANE_LINE_WIDTH) as f64);
                ctx.set_line_cap("round");
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, r as f64, PI, 0.0)?;
                ctx.line_to(end.x as f64, end.y as f64);
                ctx.stroke();
            }
            Shape::Ring { color } => {
                ctx.set_stroke_style_str(&color.to_string());
                ctx.set_line_width((s * RING_LINE_WIDTH) as f64);
                ctx.begin_path();
                ctx.arc(0.0, 0.0, s as f64, 0.0, TAU)?;
                ctx.stroke();
            }
            Shape::Star { color } => draw_star(ctx, s, sprite.scale, color)?,
            Shape::Image { .. } => {
                if let Some(img) = image {
                    draw_image(ctx, s, sprite.scale, img)?;
                }
            }
        }
        Ok(())
    }
}

fn draw_star(
    ctx: &web::CanvasRenderingContext2d,
    s: f32,
    scale: f32,
    core: Rgb,
) -> Result<(), JsValue> {
    // halo: a transparent disc whose shadow is added onto the scene
    ctx.set_global_composite_operation("lighter")?;
    ctx.set_shadow_blur((STAR_GLOW_BLUR * scale) as f64);
    ctx.set_shadow_color(&STAR_HALO.with_alpha(STAR_HALO_ALPHA));
    ctx.set_fill_style_str("rgba(255, 255, 255, 0)");
    ctx.begin_path();
    ctx.arc(0.0, 0.0, (s * STAR_HALO_RADIUS) as f64, 0.0, TAU)?;
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_global_composite_operation("source-over")?;

    let s = s as f64;
    let gradient = ctx.create_radial_gradient(0.0, 0.0, s * STAR_GRADIENT_INNER, 0.0, 0.0, s)?;
    gradient.add_color_stop(0.0, &core.to_string())?;
    gradient.add_color_stop(STAR_MID_STOP, &STAR_MID.to_string())?;
    gradient.add_color_stop(1.0, &STAR_EDGE.with_alpha(STAR_EDGE_ALPHA))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    trace(ctx, &star_outline(s as f32));
    ctx.fill();
    Ok(())
}

fn draw_image(
    ctx: &web::CanvasRenderingContext2d,
    s: f32,
    scale: f32,
    img: &web::HtmlImageElement,
) -> Result<(), JsValue> {
    let (frame, picture) = image_rects(s);
    ctx.set_fill_style_str(&IMAGE_FRAME.to_string());
    ctx.set_shadow_blur((IMAGE_GLOW_BLUR * scale) as f64);
    ctx.set_shadow_color(&IMAGE_FRAME.with_alpha(IMAGE_GLOW_ALPHA));
    fill_rect(ctx, frame);
    ctx.set_shadow_blur(0.0);

    let (x, y, w, h) = picture;
    ctx.save();
    ctx.begin_path();
    ctx.rect(x as f64, y as f64, w as f64, h as f64);
    ctx.clip();
    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        img, x as f64, y as f64, w as f64, h as f64,
    );
    ctx.restore();
    drawn
}

fn trace(ctx: &web::CanvasRenderingContext2d, pts: &[Vec2]) {
    ctx.begin_path();
    if let Some((first, rest)) = pts.split_first() {
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
    }
    ctx.close_path();
}

#[inline]
fn fill_rect(ctx: &web::CanvasRenderingContext2d, (x, y, w, h): Rect) {
    ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
}
