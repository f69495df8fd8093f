//! UI module for the Picker Wheel
//!
//! The egui sidebar: entry field, item list with remove buttons, and the
//! spin / clear / copy-link actions. It only reports what the user asked for;
//! the model applies it.

use nannou_egui::egui;
use shared::SpinOutcome;

/// State owned by the sidebar between frames
#[derive(Default)]
pub struct SidebarState {
    /// Text being typed for the next entry
    pub input: String,
    /// Whether the entry field should grab focus
    pub should_focus_input: bool,
    /// Whether the entry field had focus this frame
    pub input_focused: bool,
    /// Feedback from the last copy-link press
    pub copy_status: Option<String>,
}

/// Result of sidebar interactions
#[derive(Default)]
pub struct SidebarResult {
    pub add_item: Option<String>,
    pub remove_item: Option<usize>,
    pub clear: bool,
    pub spin: bool,
    pub copy_link: bool,
}

/// Hand the typed text over for adding and clear the field
///
/// The text goes out untouched; the store trims it before applying the
/// length cap.
fn take_entry(state: &mut SidebarState) -> String {
    state.should_focus_input = true;
    std::mem::take(&mut state.input)
}

/// Draw the sidebar panel
pub fn draw_sidebar(
    ctx: &egui::Context,
    state: &mut SidebarState,
    items: &[String],
    last_outcome: Option<&SpinOutcome>,
    time_to_rest: Option<f64>,
    width: f32,
) -> SidebarResult {
    let mut result = SidebarResult::default();

    egui::SidePanel::right("sidebar")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("Picker Wheel");
            ui.add_space(10.0);

            // Entry field
            ui.group(|ui| {
                ui.label("Add an entry");
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut state.input).hint_text("Pizza, tacos, ..."),
                    );
                    if state.should_focus_input {
                        response.request_focus();
                        state.should_focus_input = false;
                    }
                    state.input_focused = response.has_focus();

                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || submitted {
                        result.add_item = Some(take_entry(state));
                    }
                });
            });

            ui.add_space(10.0);

            // Actions
            ui.horizontal(|ui| {
                if ui.button("Spin").clicked() {
                    result.spin = true;
                }
                if ui
                    .add_enabled(!items.is_empty(), egui::Button::new("Clear"))
                    .clicked()
                {
                    result.clear = true;
                }
                if ui.button("Copy link").clicked() {
                    result.copy_link = true;
                }
            });
            if let Some(status) = &state.copy_status {
                ui.small(status.as_str());
            }

            ui.add_space(10.0);

            // Result of the last spin
            if let Some(seconds) = time_to_rest {
                ui.label(format!("Spinning... about {:.1} s left", seconds));
            } else if let Some(outcome) = last_outcome {
                ui.label(
                    egui::RichText::new(format!("Landed on: {}", outcome.label))
                        .strong()
                        .size(16.0),
                );
            }

            ui.separator();

            // Item list
            ui.label(format!("{} entries", items.len()));
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, item) in items.iter().enumerate() {
                    ui.horizontal(|ui| {
                        if ui.small_button("✕").on_hover_text("Remove").clicked() {
                            result.remove_item = Some(index);
                        }
                        ui.label(item);
                    });
                }
            });

            ui.separator();
            ui.label("Space spins · Enter adds");
        });

    result
}
