//! Deferred rendering of rows that have not been scrolled into view.
//!
//! With `initially_visible_item_count` set, rows past that count are first
//! rendered with `visible: false` and handed to a [`VisibilityObserver`]. When
//! the observer reports one of them intersecting the viewport, the row is
//! rendered again with `visible: true` and no longer observed.
//!
//! The built-in [`ViewportObserver`] compares observed rows against the list's
//! own viewport. Hosts that track visibility themselves inject their own
//! observer and deliver reports through
//! [`SelectList::handle_intersections`].

use super::element::ElementId;
use super::frame::RenderHandle;
use super::model::SelectList;
use super::types::Item;
use std::collections::BTreeMap;
use std::ops::Range;

/// A report that an observed element intersects the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The observed row element.
    pub element: ElementId,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f32,
}

/// Tracks which row elements have become visible.
pub trait VisibilityObserver: Send {
    /// Starts tracking the row `element` currently rendered at `index`.
    fn observe(&mut self, element: ElementId, index: usize);

    /// Stops tracking `element`.
    fn unobserve(&mut self, element: ElementId);

    /// Stops tracking everything.
    fn disconnect(&mut self);

    /// Reports gathered since the last call, given the row range currently
    /// inside the viewport. Observers fed from elsewhere return nothing.
    fn take_intersections(&mut self, _viewport: Range<usize>) -> Vec<Intersection> {
        Vec::new()
    }
}

/// Reports observed rows whose index falls inside the viewport.
#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    observed: BTreeMap<ElementId, usize>,
}

impl ViewportObserver {
    /// An observer tracking nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements being tracked.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&mut self, element: ElementId, index: usize) {
        self.observed.insert(element, index);
    }

    fn unobserve(&mut self, element: ElementId) {
        self.observed.remove(&element);
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }

    fn take_intersections(&mut self, viewport: Range<usize>) -> Vec<Intersection> {
        self.observed
            .iter()
            .filter(|(_, index)| viewport.contains(*index))
            .map(|(element, _)| Intersection {
                element: *element,
                ratio: 1.0,
            })
            .collect()
    }
}

impl<I: Item> SelectList<I> {
    /// Applies intersection reports from a host-side observer.
    ///
    /// Reports with a zero ratio and reports for elements that are no longer
    /// rendered are ignored.
    pub fn handle_intersections(&mut self, reports: &[Intersection]) -> RenderHandle {
        self.apply_intersections(reports);
        self.request_render()
    }

    pub(super) fn poll_visibility(&mut self) {
        let viewport = self.viewport();
        let reports = self.visibility_observer.take_intersections(viewport);
        if !reports.is_empty() {
            self.apply_intersections(&reports);
        }
    }

    fn apply_intersections(&mut self, reports: &[Intersection]) {
        for report in reports.iter().filter(|report| report.ratio > 0.0) {
            let Some(index) = self.row_index_of(report.element) else {
                log::trace!("ignoring intersection for unknown {:?}", report.element);
                continue;
            };
            log::trace!("row {index} scrolled into view");
            self.visibility_observer.unobserve(report.element);
            self.render_item_at_index(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_observer_reports_rows_in_window() {
        let mut observer = ViewportObserver::new();
        observer.observe(ElementId::new(7), 2);
        observer.observe(ElementId::new(8), 5);

        let reports = observer.take_intersections(0..3);
        assert_eq!(
            reports,
            vec![Intersection {
                element: ElementId::new(7),
                ratio: 1.0
            }]
        );

        observer.unobserve(ElementId::new(7));
        assert_eq!(observer.len(), 1);
        observer.disconnect();
        assert!(observer.is_empty());
    }
}
