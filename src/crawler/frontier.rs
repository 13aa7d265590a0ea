//! Frontier queue
//!
//! Pending `(url, depth)` pairs awaiting a fetch. The queue is FIFO for
//! `breadth_first` and `depth_first`; under `quality_first` the entire
//! queue is re-sorted by the URL quality estimate before every pop, so
//! entries enqueued earlier can be overtaken as new URLs arrive. The
//! re-sort on every pop is deliberate: scores of already-queued entries
//! are re-evaluated each iteration rather than frozen at enqueue time.

use crate::crawler::NavigationStrategy;
use crate::score::url_quality_estimate;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// One pending fetch
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub url: String,
    pub depth: u32,
}

/// The crawl work queue
#[derive(Debug)]
pub struct Frontier {
    entries: VecDeque<FrontierEntry>,
    strategy: NavigationStrategy,
}

impl Frontier {
    pub fn new(strategy: NavigationStrategy) -> Self {
        Self {
            entries: VecDeque::new(),
            strategy,
        }
    }

    /// Appends a pending fetch at the back of the queue.
    pub fn push(&mut self, url: String, depth: u32) {
        self.entries.push_back(FrontierEntry { url, depth });
    }

    /// Removes and returns the next entry per the active strategy.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        if self.strategy == NavigationStrategy::QualityFirst {
            self.resort_by_estimate();
        }
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts the whole queue by descending URL quality estimate.
    ///
    /// The sort is stable, so equal-scoring entries keep their FIFO
    /// order.
    fn resort_by_estimate(&mut self) {
        self.entries.make_contiguous().sort_by(|a, b| {
            url_quality_estimate(&b.url)
                .partial_cmp(&url_quality_estimate(&a.url))
                .unwrap_or(Ordering::Equal)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_breadth_first() {
        let mut frontier = Frontier::new(NavigationStrategy::BreadthFirst);
        frontier.push("https://site.test/a".into(), 0);
        frontier.push("https://site.test/b".into(), 1);
        frontier.push("https://site.test/c".into(), 1);

        assert_eq!(frontier.pop().unwrap().url, "https://site.test/a");
        assert_eq!(frontier.pop().unwrap().url, "https://site.test/b");
        assert_eq!(frontier.pop().unwrap().url, "https://site.test/c");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_depth_first_behaves_like_fifo() {
        let mut frontier = Frontier::new(NavigationStrategy::DepthFirst);
        frontier.push("https://site.test/a".into(), 0);
        frontier.push("https://site.test/b".into(), 1);

        assert_eq!(frontier.pop().unwrap().url, "https://site.test/a");
        assert_eq!(frontier.pop().unwrap().url, "https://site.test/b");
    }

    #[test]
    fn test_quality_first_pops_highest_estimate() {
        let mut frontier = Frontier::new(NavigationStrategy::QualityFirst);
        // ads + popup spam terms floor this one at 0.0
        frontier.push("https://site.test/ads/popup".into(), 1);
        // length point plus "guide" and "article"
        frontier.push("https://site.test/guide/article-one".into(), 1);

        assert_eq!(
            frontier.pop().unwrap().url,
            "https://site.test/guide/article-one"
        );
        assert_eq!(frontier.pop().unwrap().url, "https://site.test/ads/popup");
    }

    #[test]
    fn test_quality_first_reorders_after_enqueue() {
        let mut frontier = Frontier::new(NavigationStrategy::QualityFirst);
        frontier.push("https://site.test/plain-page-somewhere".into(), 1);
        assert_eq!(
            frontier.pop().unwrap().url,
            "https://site.test/plain-page-somewhere"
        );

        // A higher-scoring entry enqueued later overtakes older ones
        frontier.push("https://site.test/other-plain-page-here".into(), 1);
        frontier.push("https://site.test/guide/tutorial-detail".into(), 2);
        assert_eq!(
            frontier.pop().unwrap().url,
            "https://site.test/guide/tutorial-detail"
        );
    }

    #[test]
    fn test_quality_first_stable_on_ties() {
        let mut frontier = Frontier::new(NavigationStrategy::QualityFirst);
        frontier.push("https://site.test/first-plain-page".into(), 1);
        frontier.push("https://site.test/later-plain-page".into(), 1);

        // Equal estimates keep enqueue order
        assert_eq!(
            frontier.pop().unwrap().url,
            "https://site.test/first-plain-page"
        );
    }
}
