//! Render pipeline - turns wheel state into a display list
//!
//! The output is a flat list of drawing commands in canvas coordinates, in
//! paint order. A backend only has to know how to paint each command.

use crate::geometry::{colors, compute_wedges, CanvasMetrics, Point, Rgb, LABEL_FONT_SIZE};
use crate::physics::WheelState;

/// Shown instead of the wheel when there are no items
pub const PLACEHOLDER_MESSAGE: &str = "Add some values in the pane.";

/// Width of the seam between neighbouring wedges
pub const SEAM_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole canvas
    Clear { side: f64 },
    /// Filled circular sector from `start_angle` to `end_angle` (degrees)
    Sector {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: Rgb,
    },
    /// Straight stroke
    Line {
        start: Point,
        end: Point,
        weight: f64,
        color: Rgb,
    },
    /// Centered text turned by `rotation` degrees
    Text {
        text: String,
        position: Point,
        rotation: f64,
        size: f64,
        color: Rgb,
    },
    Triangle { points: [Point; 3], fill: Rgb },
    Circle { center: Point, radius: f64, fill: Rgb },
}

/// Ordered drawing commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

/// Build the display list for one frame
pub fn render(state: &WheelState, items: &[String], metrics: &CanvasMetrics) -> DisplayList {
    let mut list = DisplayList::default();
    list.push(DrawCommand::Clear { side: metrics.side });

    let wedges = compute_wedges(items, state.rotation);

    for wedge in &wedges {
        list.push(DrawCommand::Sector {
            center: metrics.center,
            radius: metrics.wheel_radius,
            start_angle: wedge.start_angle,
            end_angle: wedge.end_angle,
            fill: wedge.fill,
        });

        // The seam at index 0 stays unstroked, so a single item has none
        if wedge.index != 0 {
            list.push(DrawCommand::Line {
                start: metrics.center,
                end: metrics
                    .center
                    .polar_offset(metrics.wheel_radius, wedge.start_angle),
                weight: SEAM_WEIGHT,
                color: colors::SEAM,
            });
        }
    }

    for wedge in &wedges {
        let (position, rotation) = wedge.label_anchor(metrics);
        list.push(DrawCommand::Text {
            text: wedge.label.to_string(),
            position,
            rotation,
            size: LABEL_FONT_SIZE,
            color: wedge.label_color,
        });
    }

    list.push(DrawCommand::Triangle {
        points: metrics.pointer_triangle(),
        fill: colors::CHROME,
    });

    if wedges.is_empty() {
        list.push(DrawCommand::Text {
            text: PLACEHOLDER_MESSAGE.to_string(),
            position: metrics.center,
            rotation: 0.0,
            size: metrics.placeholder_font_size(),
            color: colors::CHROME,
        });
    } else {
        list.push(DrawCommand::Circle {
            center: metrics.center,
            radius: metrics.hub_radius(),
            fill: colors::CHROME,
        });
    }

    list
}
