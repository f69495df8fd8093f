//! Picker Wheel
//!
//! A wheel of user-supplied entries that spins with a random push, slows down
//! under constant friction and lands on one entry under the top pointer. The
//! list survives restarts and can be shared as a link.

mod clipboard;
mod drawing;
mod ui;

use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use shared::{fragment_of, FileStorage, ItemStore, SpinOutcome, Wheel, WheelConfig};
use tracing::{info, warn};

use crate::drawing::{colors, draw_display_list, CanvasTransform};
use crate::ui::{draw_sidebar, SidebarState};

const APP_NAME: &str = "picker_wheel";
const SIDEBAR_WIDTH: f32 = 280.0;

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "picker-wheel", about = "Spin a wheel to pick one of your entries")]
struct Args {
    /// Shared link to load the entries from
    #[arg(long, conflicts_with = "fragment")]
    link: Option<String>,
    /// Encoded entry list, i.e. the part of a shared link after '#'
    #[arg(long)]
    fragment: Option<String>,
    /// Rewrite the settings file with defaults before starting
    #[arg(long)]
    reset_settings: bool,
}

/// Application state
struct Model {
    /// Items, spin physics and canvas metrics
    wheel: Wheel<FileStorage>,
    /// Sidebar state
    sidebar: SidebarState,
    /// Where the last spin landed
    last_outcome: Option<SpinOutcome>,
    /// Bumped by the store subscription on every list change
    list_revision: Rc<Cell<u64>>,
    /// System clipboard, if the platform has one
    clipboard: Option<arboard::Clipboard>,
    /// egui integration
    egui: Egui,
}

fn main() {
    tracing_subscriber::fmt::init();
    nannou::app(model).update(update).run();
}

fn load_config(args: &Args) -> WheelConfig {
    if args.reset_settings {
        if let Err(e) = shared::config::delete_config(APP_NAME) {
            warn!(error = %e, "failed to delete settings");
        }
    }
    WheelConfig::load_or_default(APP_NAME)
}

fn open_storage(config: &WheelConfig) -> FileStorage {
    match FileStorage::open(&config.storage_key) {
        Ok(storage) => storage,
        Err(e) => {
            // Keep working from the current directory rather than losing every change
            warn!(error = %e, "no data directory, storing entries locally");
            FileStorage::in_dir(std::path::Path::new("."), &config.storage_key)
        }
    }
}

fn model(app: &App) -> Model {
    let args = Args::parse();
    let config = load_config(&args);

    // Create window
    let window_id = app
        .new_window()
        .title("Picker Wheel")
        .size(900, 600)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let fragment = args
        .link
        .as_deref()
        .and_then(fragment_of)
        .or(args.fragment.as_deref());
    let store = ItemStore::load_initial(open_storage(&config), fragment);

    let viewport_width = (app.window_rect().w() - SIDEBAR_WIDTH) as f64;
    let mut wheel = Wheel::new(store, &config, viewport_width);

    let list_revision = Rc::new(Cell::new(0));
    let revision = Rc::clone(&list_revision);
    wheel.subscribe(move |snapshot| {
        revision.set(snapshot.revision);
        info!(revision = snapshot.revision, count = snapshot.items.len(), "item list changed");
    });

    Model {
        wheel,
        sidebar: SidebarState {
            should_focus_input: true,
            ..Default::default()
        },
        last_outcome: None,
        list_revision,
        clipboard: clipboard::open(),
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Canvas size follows the space left of the sidebar
    model
        .wheel
        .resize((app.window_rect().w() - SIDEBAR_WIDTH) as f64);

    // Physics before anything reads the rotation
    if let Some(outcome) = model.wheel.tick(update.since_last.as_secs_f64()) {
        model.last_outcome = Some(outcome);
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let result = draw_sidebar(
        &ctx,
        &mut model.sidebar,
        model.wheel.items(),
        model.last_outcome.as_ref(),
        model.wheel.time_to_rest(),
        SIDEBAR_WIDTH,
    );

    drop(ctx);

    if result.copy_link {
        let link = model.wheel.export_link();
        let status = clipboard::copy_link(model.clipboard.as_mut(), &link);
        model.sidebar.copy_status = Some(status);
    }

    // Apply sidebar results after the egui frame is done
    let revision = model.list_revision.get();
    if let Some(text) = result.add_item {
        model.wheel.add_item(&text);
    }
    if let Some(index) = result.remove_item {
        model.wheel.remove_item(index);
    }
    if result.clear {
        model.wheel.clear();
    }
    if result.spin {
        model.wheel.request_spin(&mut rand::rng());
    }
    if model.list_revision.get() != revision {
        model.last_outcome = None;
        model.sidebar.copy_status = None;
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    // Canvas sits centered in the area left of the sidebar
    let area_center = pt2(window_rect.left() + (window_rect.w() - SIDEBAR_WIDTH) / 2.0, window_rect.y());
    let transform = CanvasTransform::new(area_center, model.wheel.metrics().side as f32);

    draw_display_list(&draw, &model.wheel.render(), &transform);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the entry field belong to the field
    if model.sidebar.input_focused {
        return;
    }
    match key {
        Key::Space => model.wheel.request_spin(&mut rand::rng()),
        Key::Return => model.sidebar.should_focus_input = true,
        _ => {}
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
