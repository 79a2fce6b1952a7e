//! One-shot load triggers for the carousel's deferred embeds.
//!
//! Third-party players are expensive iframes, so nothing is instantiated
//! until the section is about to be seen (smart load) or the user actually
//! touches the carousel (priority load). Each trigger fires once per page
//! lifetime, guarded by its own latch - the latches are deliberately
//! separate from the per-entry loaded flags, since a trigger can fire while
//! covering zero or only some entries. The two triggers are independent and
//! may run in either order.
//!
//! The scheduler only decides; it returns plans of embed-URL keys and the
//! caller performs the loads (and the animation-frame deferral).

use crate::catalog::Catalog;

/// Viewport width above which the centered carousel shows neighbours, so the
/// smart load warms three players instead of one.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Whether the carousel widget may run in wrap-around mode. The widget
/// misbehaves in loop mode with two or fewer slides.
pub fn loop_enabled(slide_count: usize) -> bool {
    slide_count > 2
}

/// Plan produced by the first-interaction trigger: `now` is the active
/// slide (perceived latency matters there), `deferred` is everything else
/// still unloaded in the current render, to be loaded on the next frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriorityLoad {
    pub now: Option<String>,
    pub deferred: Vec<String>,
}

/// Latch pair driving the two one-shot triggers.
#[derive(Clone, Debug, Default)]
pub struct LoadScheduler {
    smart_fired: bool,
    full_fired: bool,
}

impl LoadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// First viewport intersection of the portfolio section.
    ///
    /// Walks the ORIGINAL catalog order regardless of any active filter:
    /// the centered carousel opens on the first entry flanked by the second
    /// and the wrap-around last, so those are the three warmed on wide
    /// viewports. Narrow viewports only show one slide and warm one.
    /// Returns an empty plan on every call after the first.
    pub fn smart_load(&mut self, catalog: &Catalog, viewport_width: f64) -> Vec<String> {
        if self.smart_fired {
            return Vec::new();
        }
        self.smart_fired = true;

        let entries = catalog.all();
        let Some(first) = entries.first() else {
            return Vec::new();
        };

        let mut plan: Vec<String> = Vec::new();
        let mut push = |url: &str| {
            if !plan.iter().any(|u| u == url) {
                plan.push(url.to_string());
            }
        };

        if viewport_width > DESKTOP_MIN_WIDTH {
            if let Some(last) = entries.last() {
                push(&last.embed_url);
            }
            push(&first.embed_url);
            if let Some(second) = entries.get(1) {
                push(&second.embed_url);
            }
        } else {
            push(&first.embed_url);
        }
        plan
    }

    /// First user interaction with the carousel (pointer-down, navigation,
    /// or opening the filter panel).
    ///
    /// Operates on the CURRENTLY RENDERED slides, not the catalog - entries
    /// filtered out of view are not preloaded. Returns `None` once latched.
    pub fn priority_load(
        &mut self,
        catalog: &Catalog,
        active: Option<&str>,
        rendered: &[String],
    ) -> Option<PriorityLoad> {
        if self.full_fired {
            return None;
        }
        self.full_fired = true;

        let unloaded = |url: &&String| catalog.find(url).is_some_and(|e| !e.is_loaded());

        let now = active
            .and_then(|url| catalog.find(url))
            .filter(|e| !e.is_loaded())
            .map(|e| e.embed_url.clone());

        let deferred = rendered
            .iter()
            .filter(unloaded)
            .filter(|url| Some(url.as_str()) != now.as_deref())
            .cloned()
            .collect();

        Some(PriorityLoad { now, deferred })
    }

    pub fn smart_fired(&self) -> bool {
        self.smart_fired
    }

    pub fn full_fired(&self) -> bool {
        self.full_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryRecord;

    fn catalog(n: usize) -> Catalog {
        Catalog::from_records(
            (0..n)
                .map(|i| EntryRecord {
                    title: Some(format!("Project {i}")),
                    tags: Some("mixing".to_string()),
                    embed_url: Some(format!("url-{i}")),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_loop_only_above_two_slides() {
        assert!(!loop_enabled(0));
        assert!(!loop_enabled(2));
        assert!(loop_enabled(3));
    }

    #[test]
    fn test_smart_load_desktop_loads_first_second_last() {
        let catalog = catalog(5);
        let mut scheduler = LoadScheduler::new();
        let plan = scheduler.smart_load(&catalog, 1024.0);
        assert_eq!(plan, vec!["url-4", "url-0", "url-1"]);
    }

    #[test]
    fn test_smart_load_mobile_loads_first_only() {
        let catalog = catalog(5);
        let mut scheduler = LoadScheduler::new();
        let plan = scheduler.smart_load(&catalog, 480.0);
        assert_eq!(plan, vec!["url-0"]);
    }

    #[test]
    fn test_smart_load_768_is_not_desktop() {
        let catalog = catalog(5);
        let mut scheduler = LoadScheduler::new();
        assert_eq!(scheduler.smart_load(&catalog, 768.0), vec!["url-0"]);
    }

    #[test]
    fn test_smart_load_short_catalog_deduplicates() {
        let mut scheduler = LoadScheduler::new();
        // Two entries: last == second, so only two distinct loads.
        assert_eq!(
            scheduler.smart_load(&catalog(2), 1024.0),
            vec!["url-1", "url-0"]
        );

        let mut scheduler = LoadScheduler::new();
        // One entry: everything collapses onto it.
        assert_eq!(scheduler.smart_load(&catalog(1), 1024.0), vec!["url-0"]);
    }

    #[test]
    fn test_smart_load_latches() {
        let catalog = catalog(5);
        let mut scheduler = LoadScheduler::new();
        assert_eq!(scheduler.smart_load(&catalog, 1024.0).len(), 3);
        assert!(scheduler.smart_load(&catalog, 1024.0).is_empty());
        assert!(scheduler.smart_fired());
    }

    #[test]
    fn test_smart_load_empty_catalog_still_latches() {
        let mut scheduler = LoadScheduler::new();
        assert!(scheduler.smart_load(&catalog(0), 1024.0).is_empty());
        assert!(scheduler.smart_fired());
    }

    #[test]
    fn test_priority_load_covers_rendered_unloaded() {
        let mut catalog = catalog(5);
        catalog.mark_loaded("url-0");

        // Filtered render: three slides in the DOM, active in the middle.
        let rendered: Vec<String> = vec!["url-0".into(), "url-2".into(), "url-4".into()];
        let mut scheduler = LoadScheduler::new();
        let plan = scheduler
            .priority_load(&catalog, Some("url-2"), &rendered)
            .unwrap();

        assert_eq!(plan.now.as_deref(), Some("url-2"));
        // url-0 is already loaded, url-1/url-3 are not rendered.
        assert_eq!(plan.deferred, vec!["url-4"]);
    }

    #[test]
    fn test_priority_load_active_already_loaded() {
        let mut catalog = catalog(3);
        catalog.mark_loaded("url-1");
        let rendered: Vec<String> = vec!["url-0".into(), "url-1".into(), "url-2".into()];
        let mut scheduler = LoadScheduler::new();
        let plan = scheduler
            .priority_load(&catalog, Some("url-1"), &rendered)
            .unwrap();
        assert_eq!(plan.now, None);
        assert_eq!(plan.deferred, vec!["url-0", "url-2"]);
    }

    #[test]
    fn test_priority_load_latches() {
        let catalog = catalog(3);
        let rendered: Vec<String> = vec!["url-0".into()];
        let mut scheduler = LoadScheduler::new();
        assert!(scheduler
            .priority_load(&catalog, None, &rendered)
            .is_some());
        assert!(scheduler
            .priority_load(&catalog, None, &rendered)
            .is_none());
        assert!(scheduler.full_fired());
    }

    #[test]
    fn test_triggers_are_independent() {
        let catalog = catalog(4);
        let rendered: Vec<String> = (0..4).map(|i| format!("url-{i}")).collect();

        // Priority first, smart second - both still fire exactly once.
        let mut scheduler = LoadScheduler::new();
        let plan = scheduler
            .priority_load(&catalog, Some("url-0"), &rendered)
            .unwrap();
        assert_eq!(plan.now.as_deref(), Some("url-0"));
        assert_eq!(plan.deferred.len(), 3);
        assert!(!scheduler.smart_fired());
        assert_eq!(scheduler.smart_load(&catalog, 1024.0).len(), 3);
    }
}
