//! Scroll-reveal state machine
//!
//! A section starts hidden and fades in (opacity 0 → 1, vertical offset
//! +20 → 0) the first time it enters the viewport. The reveal is one-shot:
//!
//! ```text
//! Unobserved ──attach()──▶ Watching ──on_intersection()──▶ Revealed
//! ```
//!
//! `Revealed` is terminal. A controller that never gets attached (no
//! viewport-intersection support in the host) simply never reveals.
//!
//! # Usage Example
//!
//! ```rust
//! use glass_saas::core::reveal::RevealController;
//!
//! let mut controller = RevealController::default();
//! assert!(controller.attach());
//!
//! // Below the 10% threshold: still hidden
//! assert!(!controller.on_intersection(true, 0.05));
//!
//! // Crossing it reveals exactly once
//! assert!(controller.on_intersection(true, 0.4));
//! assert!(!controller.on_intersection(true, 1.0));
//! assert!(controller.revealed());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default share of the element that must be visible before it reveals (10%)
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default fade-in duration (600ms)
pub const DEFAULT_DURATION_MS: u64 = 600;

/// Default initial vertical offset of a hidden element, in pixels
pub const DEFAULT_OFFSET_Y: f64 = 20.0;

/// Default delay between children of a staggered group (200ms)
pub const DEFAULT_STAGGER_MS: u64 = 200;

/// Tunables of the reveal animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Minimum intersection ratio (0.0..=1.0) that triggers the reveal
    pub threshold: f64,
    /// Length of the hidden → visible transition
    pub duration: Duration,
    /// Vertical offset of the hidden state
    pub offset_y: f64,
    /// Delay added per child inside a staggered group
    pub stagger: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            offset_y: DEFAULT_OFFSET_Y,
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
        }
    }
}

impl RevealConfig {
    /// Transition delay of the `index`-th child of a staggered group
    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// Lifecycle of a single revealable section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Mounted, but no viewport observer is attached yet
    #[default]
    Unobserved,
    /// An observer is attached and waiting for the first intersection
    Watching,
    /// The section has been shown; terminal
    Revealed,
}

/// One-shot reveal controller for a single section instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealController {
    state: RevealState,
    config: RevealConfig,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            state: RevealState::Unobserved,
            config,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Whether the section is in its visible state
    pub fn revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Record that a viewport observer now watches the section.
    ///
    /// Returns `true` only for the `Unobserved → Watching` transition.
    pub fn attach(&mut self) -> bool {
        if self.state == RevealState::Unobserved {
            self.state = RevealState::Watching;
            true
        } else {
            false
        }
    }

    /// Feed one intersection observation into the controller.
    ///
    /// The check and the transition happen in the same call, so repeated or
    /// racing callbacks can never trigger the reveal twice. Returns `true`
    /// exactly once: when this observation revealed the section.
    pub fn on_intersection(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.state != RevealState::Watching {
            return false;
        }
        if !is_intersecting || ratio < self.config.threshold {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

/// Inline CSS for the two ends of the reveal transition.
///
/// The browser interpolates between them; we only describe the endpoints
/// and the timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub duration: Duration,
    pub offset_y: f64,
    /// Fade only, no vertical motion (used by stagger containers)
    pub fade_only: bool,
}

impl RevealStyle {
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            duration: config.duration,
            offset_y: config.offset_y,
            fade_only: false,
        }
    }

    pub fn fade_only(mut self) -> Self {
        self.fade_only = true;
        self
    }

    /// Render the inline style for the hidden (`visible == false`) or
    /// visible end of the transition.
    pub fn render(&self, visible: bool, delay: Duration) -> String {
        let opacity = if visible { 1 } else { 0 };
        let duration = self.duration.as_secs_f64();
        let delay = delay.as_secs_f64();

        if self.fade_only {
            return format!(
                "opacity: {opacity}; transition: opacity {duration}s ease-out {delay}s;"
            );
        }

        let offset = if visible { 0.0 } else { self.offset_y };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
        )
    }
}

/// Handle of one registered viewport observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(u64);

static NEXT_WATCH_ID: AtomicU64 = AtomicU64::new(1);

impl WatchId {
    /// Allocate a process-unique handle
    pub fn next() -> Self {
        Self(NEXT_WATCH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Table of live observers keyed by section handle.
///
/// Each mounted section acquires one entry and releases it on unmount;
/// dropping the released value tears the observer down.
#[derive(Debug)]
pub struct ObserverTable<W> {
    entries: HashMap<WatchId, W>,
}

impl<W> Default for ObserverTable<W> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<W> ObserverTable<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `watch` under `id`, returning any watch it displaced
    pub fn acquire(&mut self, id: WatchId, watch: W) -> Option<W> {
        self.entries.insert(id, watch)
    }

    /// Remove the watch registered under `id`
    pub fn release(&mut self, id: WatchId) -> Option<W> {
        self.entries.remove(&id)
    }
}

#[cfg(test)]
impl<W> ObserverTable<W> {
    fn contains(&self, id: WatchId) -> bool {
        self.entries.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_controller_starts_hidden() {
        let controller = RevealController::default();
        assert_eq!(controller.state(), RevealState::Unobserved);
        assert!(!controller.revealed());
    }

    #[test]
    fn test_attach_only_once() {
        let mut controller = RevealController::default();
        assert!(controller.attach());
        assert!(!controller.attach());
        assert_eq!(controller.state(), RevealState::Watching);
    }

    #[test]
    fn test_unobserved_never_reveals() {
        let mut controller = RevealController::default();
        assert!(!controller.on_intersection(true, 1.0));
        assert!(!controller.revealed());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut controller = RevealController::default();
        controller.attach();

        assert!(!controller.on_intersection(true, 0.0));
        assert!(!controller.on_intersection(true, 0.09));
        assert!(!controller.revealed());
    }

    #[test]
    fn test_not_intersecting_stays_hidden() {
        let mut controller = RevealController::default();
        controller.attach();

        assert!(!controller.on_intersection(false, 0.5));
        assert_eq!(controller.state(), RevealState::Watching);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut controller = RevealController::default();
        controller.attach();
        assert!(controller.on_intersection(true, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_reveal_fires_once_and_never_reverts() {
        let mut controller = RevealController::default();
        controller.attach();

        let observations = [
            (false, 0.0),
            (true, 0.05),
            (true, 0.3),
            (true, 1.0),
            (false, 0.0),
            (true, 0.2),
        ];

        let mut fired = 0;
        let mut history = Vec::new();
        for (intersecting, ratio) in observations {
            if controller.on_intersection(intersecting, ratio) {
                fired += 1;
            }
            history.push(controller.revealed());
        }

        assert_eq!(fired, 1);
        assert_eq!(history, vec![false, false, true, true, true, true]);
    }

    #[test]
    fn test_attach_after_reveal_is_ignored() {
        let mut controller = RevealController::default();
        controller.attach();
        controller.on_intersection(true, 1.0);

        assert!(!controller.attach());
        assert_eq!(controller.state(), RevealState::Revealed);
    }

    #[test]
    fn test_custom_threshold() {
        let mut controller = RevealController::new(RevealConfig {
            threshold: 0.5,
            ..RevealConfig::default()
        });
        controller.attach();

        assert!(!controller.on_intersection(true, 0.3));
        assert!(controller.on_intersection(true, 0.6));
    }

    #[test]
    fn test_default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.duration, Duration::from_millis(600));
        assert_eq!(config.offset_y, 20.0);
        assert_eq!(config.stagger, Duration::from_millis(200));
    }

    #[test]
    fn test_stagger_delay() {
        let config = RevealConfig::default();
        assert_eq!(config.stagger_delay(0), Duration::ZERO);
        assert_eq!(config.stagger_delay(1), Duration::from_millis(200));
        assert_eq!(config.stagger_delay(3), Duration::from_millis(600));
    }

    #[test]
    fn test_hidden_style() {
        let style = RevealStyle::from_config(&RevealConfig::default());
        let css = style.render(false, Duration::ZERO);

        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("translateY(20px)"));
        assert!(css.contains("opacity 0.6s ease-out 0s"));
    }

    #[test]
    fn test_visible_style_with_delay() {
        let style = RevealStyle::from_config(&RevealConfig::default());
        let css = style.render(true, Duration::from_millis(400));

        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("translateY(0px)"));
        assert!(css.contains("transform 0.6s ease-out 0.4s"));
    }

    #[test]
    fn test_fade_only_style_has_no_transform() {
        let style = RevealStyle::from_config(&RevealConfig::default()).fade_only();
        let css = style.render(false, Duration::ZERO);

        assert!(css.contains("opacity: 0;"));
        assert!(!css.contains("transform"));
    }

    #[test]
    fn test_stagger_delay_saturates() {
        let config = RevealConfig::default();
        let max = config.stagger.saturating_mul(u32::MAX);
        assert_eq!(config.stagger_delay(usize::MAX), max);

        // Indices past u32::MAX clamp instead of wrapping back to zero
        if let Ok(index) = usize::try_from(u64::from(u32::MAX) + 1) {
            assert_eq!(config.stagger_delay(index), max);
        }
    }

    #[test]
    fn test_watch_ids_are_unique() {
        let a = WatchId::next();
        let b = WatchId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_observer_table_acquire_release() {
        let mut table = ObserverTable::new();
        let first = WatchId::next();
        let second = WatchId::next();

        assert!(table.acquire(first, "first").is_none());
        assert!(table.acquire(second, "second").is_none());
        assert_eq!(table.len(), 2);
        assert!(table.contains(first));

        assert_eq!(table.release(first), Some("first"));
        assert_eq!(table.release(first), None);
        assert!(!table.contains(first));
        assert_eq!(table.len(), 1);

        assert_eq!(table.release(second), Some("second"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_observer_table_release_drops_watch() {
        struct Watch(Rc<Cell<bool>>);
        impl Drop for Watch {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let disconnected = Rc::new(Cell::new(false));
        let mut table = ObserverTable::new();
        let id = WatchId::next();
        table.acquire(id, Watch(disconnected.clone()));
        assert!(!disconnected.get());

        drop(table.release(id));
        assert!(disconnected.get());
    }
}
