//! The wheel: item store, spin physics and canvas metrics behind one owner
//!
//! The host calls [`Wheel::tick`] once per frame with the elapsed seconds and
//! then paints [`Wheel::render`]. User actions call the mutators directly.

use rand::Rng;
use tracing::{debug, info};

use crate::config::WheelConfig;
use crate::geometry::{wedge_at_pointer, CanvasMetrics, LayoutConfig};
use crate::physics::{PhysicsConstants, WheelState};
use crate::render::{render, DisplayList};
use crate::share::export_link;
use crate::storage::ItemStorage;
use crate::store::{ItemStore, ItemsSnapshot};

/// Entry under the pointer when a spin came to rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub index: usize,
    pub label: String,
}

pub struct Wheel<S: ItemStorage> {
    store: ItemStore<S>,
    state: WheelState,
    physics: PhysicsConstants,
    layout: LayoutConfig,
    metrics: CanvasMetrics,
    share_base_url: String,
}

impl<S: ItemStorage> Wheel<S> {
    pub fn new(store: ItemStore<S>, config: &WheelConfig, viewport_width: f64) -> Self {
        Self {
            store,
            state: WheelState::new(),
            physics: config.physics.constants(),
            layout: config.layout,
            metrics: CanvasMetrics::for_viewport(viewport_width, &config.layout),
            share_base_url: config.share_base_url.clone(),
        }
    }

    pub fn items(&self) -> &[String] {
        self.store.items()
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn metrics(&self) -> &CanvasMetrics {
        &self.metrics
    }

    pub fn physics(&self) -> &PhysicsConstants {
        &self.physics
    }

    /// Seconds left in the current spin, `None` while at rest
    pub fn time_to_rest(&self) -> Option<f64> {
        self.state
            .is_spinning()
            .then(|| self.state.time_to_rest(&self.physics))
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ItemsSnapshot<'_>) + 'static) {
        self.store.subscribe(listener);
    }

    pub fn add_item(&mut self, text: &str) -> bool {
        self.store.add_item(text)
    }

    pub fn remove_item(&mut self, index: usize) -> Option<String> {
        self.store.remove_item(index)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn request_spin<R: Rng>(&mut self, rng: &mut R) {
        let impulse = self.state.spin(rng, &self.physics);
        info!(impulse, speed = self.state.speed, "spin requested");
    }

    /// Link that reproduces the current list
    pub fn export_link(&self) -> String {
        export_link(&self.share_base_url, self.store.items())
    }

    /// Re-select the canvas size for a new viewport width
    ///
    /// Returns true if the metrics changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let metrics = CanvasMetrics::for_viewport(viewport_width, &self.layout);
        if metrics == self.metrics {
            return false;
        }
        debug!(side = metrics.side, mobile = metrics.is_mobile, "canvas resized");
        self.metrics = metrics;
        true
    }

    /// Advance the physics by `dt` seconds
    ///
    /// Returns the entry under the pointer on the frame the wheel comes to rest.
    pub fn tick(&mut self, dt: f64) -> Option<SpinOutcome> {
        let was_spinning = self.state.is_spinning();
        if !self.state.step(dt, &self.physics) {
            return None;
        }
        if !was_spinning || self.state.is_spinning() {
            return None;
        }

        let index = wedge_at_pointer(self.store.len(), self.state.rotation)?;
        let label = self.store.items()[index].clone();
        info!(index, label = %label, "wheel stopped");
        Some(SpinOutcome { index, label })
    }

    /// Display list for the current frame
    pub fn render(&self) -> DisplayList {
        render(&self.state, self.store.items(), &self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;
    use crate::share::fragment_of;
    use crate::storage::MemoryStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wheel(labels: &[&str]) -> Wheel<MemoryStorage> {
        let mut store = ItemStore::new(MemoryStorage::new());
        for label in labels {
            store.add_item(label);
        }
        Wheel::new(store, &WheelConfig::default(), 1280.0)
    }

    #[test]
    fn test_spin_then_rest_reports_pointer_entry() {
        let mut wheel = wheel(&["A", "B", "C", "D"]);
        let mut rng = StdRng::seed_from_u64(5);
        wheel.request_spin(&mut rng);
        assert!(wheel.state().is_spinning());

        let mut outcome = None;
        for _ in 0..100_000 {
            if let Some(result) = wheel.tick(1.0 / 60.0) {
                outcome = Some(result);
                break;
            }
        }

        let outcome = outcome.expect("wheel should come to rest");
        assert!(!wheel.state().is_spinning());
        let expected = wedge_at_pointer(4, wheel.state().rotation).unwrap();
        assert_eq!(outcome.index, expected);
        assert_eq!(outcome.label, wheel.items()[expected]);

        // No repeat report while resting
        assert_eq!(wheel.tick(1.0 / 60.0), None);
    }

    #[test]
    fn test_spin_on_empty_wheel_reports_nothing() {
        let mut wheel = wheel(&[]);
        let mut rng = StdRng::seed_from_u64(11);
        wheel.request_spin(&mut rng);
        for _ in 0..10_000 {
            assert_eq!(wheel.tick(0.05), None);
        }
        assert!(!wheel.state().is_spinning());
    }

    #[test]
    fn test_skipped_tick_changes_nothing() {
        let mut wheel = wheel(&["A", "B"]);
        let mut rng = StdRng::seed_from_u64(3);
        wheel.request_spin(&mut rng);
        let before = *wheel.state();
        assert_eq!(wheel.tick(-0.5), None);
        assert_eq!(wheel.tick(0.0), None);
        assert_eq!(*wheel.state(), before);
    }

    #[test]
    fn test_resize_across_breakpoint() {
        let mut wheel = wheel(&["A"]);
        assert_eq!(wheel.metrics().side, 500.0);
        assert!(!wheel.resize(1000.0));
        assert!(wheel.resize(400.0));
        assert_eq!(wheel.metrics().side, 360.0);
        assert!(!wheel.resize(300.0));

        // The next frame uses the new metrics
        let list = wheel.render();
        assert_eq!(list.commands[0], DrawCommand::Clear { side: 360.0 });
    }

    #[test]
    fn test_mutations_go_through_store() {
        let mut wheel = wheel(&["A", "B", "C"]);
        assert_eq!(wheel.remove_item(1).as_deref(), Some("B"));
        assert!(!wheel.add_item("  "));
        assert_eq!(wheel.store().storage().record(), Some(r#"["A","C"]"#));
        wheel.clear();
        assert!(wheel.items().is_empty());
    }

    #[test]
    fn test_export_link_reloads() {
        let wheel = wheel(&["E.Honda", "Chun Li", "M.Bison", "Ryu"]);
        let link = wheel.export_link();
        assert!(link.starts_with("https://picker-wheel.app/#"));

        let store = ItemStore::load_initial(MemoryStorage::new(), fragment_of(&link));
        assert_eq!(store.items(), wheel.items());
    }

    #[test]
    fn test_time_to_rest_counts_down() {
        let mut wheel = wheel(&["A", "B"]);
        assert_eq!(wheel.time_to_rest(), None);

        let mut rng = StdRng::seed_from_u64(9);
        wheel.request_spin(&mut rng);
        let start = wheel.time_to_rest().unwrap();
        assert!((start - wheel.state().speed / 360.0).abs() < 1e-9);

        wheel.tick(1.0);
        let later = wheel.time_to_rest().unwrap();
        assert!((start - later - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_physics_from_config() {
        let mut config = WheelConfig::default();
        config.physics.preset = crate::physics::PhysicsPreset::Legacy;
        let wheel = Wheel::new(ItemStore::new(MemoryStorage::new()), &config, 800.0);
        assert_eq!(wheel.physics().max_speed, 450.0);
    }
}
