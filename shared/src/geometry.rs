//! Geometry engine - wedge layout and canvas metrics
//!
//! Angles are in degrees and follow canvas conventions: the origin is the
//! top-left corner, y grows downward, 0° points right and positive angles
//! turn clockwise.

use serde::{Deserialize, Serialize};

/// Angle of the fixed pointer at the top of the canvas
pub const POINTER_ANGLE: f64 = 270.0;

/// Font size for wedge labels, in pixels
pub const LABEL_FONT_SIZE: f64 = 16.0;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Color palette for the wheel
pub mod colors {
    use super::Rgb;

    pub const WEDGE_A: Rgb = Rgb::new(0x6C, 0x8E, 0xAD);
    pub const WEDGE_B: Rgb = Rgb::new(0x5F, 0xAD, 0x41);
    pub const WEDGE_C: Rgb = Rgb::new(0xF6, 0x94, 0xC1);
    /// Fill of the last wedge
    pub const WINNER: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const LABEL: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const LABEL_WINNER: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const SEAM: Rgb = Rgb::new(0xCD, 0xCD, 0xCD);
    /// Pointer, hub and placeholder text
    pub const CHROME: Rgb = Rgb::new(0x24, 0x24, 0x23);

    pub const PALETTE: [Rgb; 3] = [WEDGE_A, WEDGE_B, WEDGE_C];
}

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` along `angle_deg`
    pub fn polar_offset(self, radius: f64, angle_deg: f64) -> Point {
        let theta = normalize_degrees(angle_deg).to_radians();
        Point::new(self.x + radius * theta.cos(), self.y + radius * theta.sin())
    }
}

/// Reduce an angle into [0, 360) without touching the caller's accumulator
pub fn normalize_degrees(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Layout settings for the square canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport widths below this use the mobile canvas size
    pub breakpoint: f64,
    pub desktop_size: f64,
    pub mobile_size: f64,
    /// Wheel radius as a fraction of half the canvas side
    pub wheel_fraction: f64,
    /// Label anchor distance as a fraction of the wheel radius
    pub label_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: 425.0,
            desktop_size: 500.0,
            mobile_size: 360.0,
            wheel_fraction: 0.975,
            label_fraction: 0.65,
        }
    }
}

/// Derived canvas constants, recomputed whenever the viewport crosses the breakpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    /// Side length of the square canvas
    pub side: f64,
    pub center: Point,
    pub wheel_radius: f64,
    pub label_radius: f64,
    pub is_mobile: bool,
}

impl CanvasMetrics {
    pub fn for_viewport(viewport_width: f64, layout: &LayoutConfig) -> Self {
        let is_mobile = viewport_width < layout.breakpoint;
        let side = if is_mobile {
            layout.mobile_size
        } else {
            layout.desktop_size
        };
        let center = Point::new(side / 2.0, side / 2.0);
        let wheel_radius = center.x * layout.wheel_fraction;

        Self {
            side,
            center,
            wheel_radius,
            label_radius: wheel_radius * layout.label_fraction,
            is_mobile,
        }
    }

    /// Font size of the empty-state message
    pub fn placeholder_font_size(&self) -> f64 {
        self.side / if self.is_mobile { 18.0 } else { 24.0 }
    }

    pub fn hub_radius(&self) -> f64 {
        self.wheel_radius / 32.0
    }

    /// Vertices of the pointer triangle, tip last
    pub fn pointer_triangle(&self) -> [Point; 3] {
        let w = self.side;
        let h = self.side;
        [
            Point::new(self.center.x + w / 32.0, h / 64.0),
            Point::new(self.center.x - w / 32.0, h / 64.0),
            Point::new(self.center.x, h / 18.0),
        ]
    }
}

/// One item's sector of the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge<'a> {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: Rgb,
    pub label_color: Rgb,
    pub label: &'a str,
    pub is_winner: bool,
}

impl Wedge<'_> {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn bisector(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    /// Label position on the bisector and its text rotation
    ///
    /// The text is turned half a revolution from the bisector so it reads
    /// right-side-up when the wheel is upright.
    pub fn label_anchor(&self, metrics: &CanvasMetrics) -> (Point, f64) {
        let bisector = self.bisector();
        let position = metrics.center.polar_offset(metrics.label_radius, bisector);
        (position, normalize_degrees(bisector + 180.0))
    }
}

/// Fill and label color for a wedge
pub fn wedge_colors(index: usize, count: usize) -> (Rgb, Rgb) {
    if index + 1 == count {
        (colors::WINNER, colors::LABEL_WINNER)
    } else {
        (colors::PALETTE[index % colors::PALETTE.len()], colors::LABEL)
    }
}

/// Split the wheel into one equal wedge per item
pub fn compute_wedges(items: &[String], rotation: f64) -> Vec<Wedge<'_>> {
    if items.is_empty() {
        return Vec::new();
    }

    let count = items.len();
    let subdiv = 360.0 / count as f64;

    items
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let (fill, label_color) = wedge_colors(index, count);
            Wedge {
                index,
                start_angle: index as f64 * subdiv + rotation,
                end_angle: (index + 1) as f64 * subdiv + rotation,
                fill,
                label_color,
                label,
                is_winner: index + 1 == count,
            }
        })
        .collect()
}

/// Index of the wedge under the top pointer
pub fn wedge_at_pointer(count: usize, rotation: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let subdiv = 360.0 / count as f64;
    let relative = normalize_degrees(POINTER_ANGLE - rotation);
    let index = (relative / subdiv).floor() as usize;
    Some(index.min(count - 1))
}
