//! Drawing module - paints the wheel's display list with nannou
//!
//! The display list is in canvas coordinates (origin top-left, y down,
//! clockwise degrees). nannou is y-up with counter-clockwise radians, so every
//! point and angle is converted here.

use nannou::prelude::*;
use shared::{DisplayList, DrawCommand, Point, Rgb};

/// Color palette for the app chrome
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 238,
        green: 238,
        blue: 232,
        standard: std::marker::PhantomData,
    };
    pub const CANVAS: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
}

/// Arc segments used for a full turn
const SEGMENTS_PER_TURN: f32 = 180.0;

/// Maps canvas pixels onto a square area of the window
pub struct CanvasTransform {
    /// Window-space rect of the canvas
    pub rect: Rect,
}

impl CanvasTransform {
    pub fn new(center: Point2, side: f32) -> Self {
        Self {
            rect: Rect::from_xy_wh(center, vec2(side, side)),
        }
    }

    pub fn point(&self, p: Point) -> Point2 {
        pt2(self.rect.left() + p.x as f32, self.rect.top() - p.y as f32)
    }

    /// Clockwise canvas degrees to nannou radians
    pub fn angle(&self, degrees: f64) -> f32 {
        -(shared::normalize_degrees(degrees) as f32).to_radians()
    }
}

fn color(rgb: Rgb) -> Srgb<u8> {
    srgb(rgb.red, rgb.green, rgb.blue)
}

/// Paint one frame of the wheel
pub fn draw_display_list(draw: &Draw, list: &DisplayList, transform: &CanvasTransform) {
    for command in list.iter() {
        match command {
            DrawCommand::Clear { .. } => {
                draw.rect()
                    .xy(transform.rect.xy())
                    .wh(transform.rect.wh())
                    .color(colors::CANVAS);
            }
            DrawCommand::Sector {
                center,
                radius,
                start_angle,
                end_angle,
                fill,
            } => {
                let points = sector_points(
                    transform.point(*center),
                    *radius as f32,
                    transform.angle(*start_angle),
                    (end_angle - start_angle) as f32,
                );
                draw.polygon().points(points).color(color(*fill));
            }
            DrawCommand::Line {
                start,
                end,
                weight,
                color: stroke,
            } => {
                draw.line()
                    .start(transform.point(*start))
                    .end(transform.point(*end))
                    .weight(*weight as f32)
                    .color(color(*stroke));
            }
            DrawCommand::Text {
                text,
                position,
                rotation,
                size,
                color: fill,
            } => {
                draw.text(text)
                    .xy(transform.point(*position))
                    .rotate(transform.angle(*rotation))
                    .color(color(*fill))
                    .font_size(size.round() as u32)
                    .w(transform.rect.w());
            }
            DrawCommand::Triangle { points, fill } => {
                let [a, b, c] = *points;
                draw.tri()
                    .points(transform.point(a), transform.point(b), transform.point(c))
                    .color(color(*fill));
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => {
                draw.ellipse()
                    .xy(transform.point(*center))
                    .radius(*radius as f32)
                    .color(color(*fill));
            }
        }
    }
}

/// Outline of a pie slice: the center followed by points along the arc
///
/// `start` is in nannou radians; `sweep_deg` runs clockwise on screen.
fn sector_points(center: Point2, radius: f32, start: f32, sweep_deg: f32) -> Vec<Point2> {
    let sweep = sweep_deg.to_radians();
    let segments = ((sweep_deg / 360.0) * SEGMENTS_PER_TURN).ceil().max(2.0) as usize;

    std::iter::once(center)
        .chain((0..=segments).map(|i| {
            let angle = start - sweep * (i as f32 / segments as f32);
            center + vec2(angle.cos(), angle.sin()) * radius
        }))
        .collect()
}
