//! Pure visibility math fed by whatever observes element geometry.
//!
//! The observer side (see `gallery::observe`) measures rectangles and hands
//! over `VisibilitySample`s; everything that decides *what* is visible lives
//! here so it can be tested without a DOM.

use std::collections::BTreeSet;

/// Fraction of a section that must be on screen before it fades in.
pub const FADE_IN_THRESHOLD: f64 = 0.2;

/// A one-dimensional extent along the scroll axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }
}

/// Visible share of `target` inside `viewport`, in `[0, 1]`.
pub fn intersection_ratio(viewport: Span, target: Span) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let overlap = viewport.end.min(target.end) - viewport.start.max(target.start);
    (overlap.max(0.0) / target.len()).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample<K> {
    pub key: K,
    pub ratio: f64,
}

impl<K> VisibilitySample<K> {
    pub fn new(key: K, ratio: f64) -> Self {
        Self { key, ratio }
    }

    pub fn is_intersecting(&self) -> bool {
        self.ratio > 0.0
    }
}

/// Key of the intersecting sample with the highest ratio. On ties the
/// earliest sample wins.
pub fn most_visible<K: Copy>(samples: &[VisibilitySample<K>]) -> Option<K> {
    let mut best: Option<&VisibilitySample<K>> = None;
    for sample in samples.iter().filter(|s| s.is_intersecting()) {
        match best {
            Some(current) if sample.ratio <= current.ratio => {}
            _ => best = Some(sample),
        }
    }
    best.map(|sample| sample.key)
}

/// One-shot reveal tracker: a key is reported the first time it crosses the
/// threshold and is ignored afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeIn<K: Ord> {
    threshold: f64,
    revealed: BTreeSet<K>,
}

impl<K: Ord> Default for FadeIn<K> {
    fn default() -> Self {
        Self::with_threshold(FADE_IN_THRESHOLD)
    }
}

impl<K: Ord> FadeIn<K> {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: BTreeSet::new(),
        }
    }

    /// Whether observing `ratio` for `key` would reveal it now.
    pub fn would_reveal(&self, key: &K, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold && !self.revealed.contains(key)
    }

    /// Returns `true` only for the observation that reveals `key`.
    pub fn observe(&mut self, key: K, ratio: f64) -> bool {
        if !self.would_reveal(&key, ratio) {
            return false;
        }
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partially_visible_target() {
        let viewport = Span::new(0.0, 400.0);
        assert_eq!(intersection_ratio(viewport, Span::new(300.0, 500.0)), 0.5);
        assert_eq!(intersection_ratio(viewport, Span::new(-100.0, 100.0)), 0.5);
        assert_eq!(intersection_ratio(viewport, Span::new(50.0, 150.0)), 1.0);
        assert_eq!(intersection_ratio(viewport, Span::new(400.0, 600.0)), 0.0);
        assert_eq!(intersection_ratio(viewport, Span::new(700.0, 900.0)), 0.0);
    }

    #[test]
    fn empty_target_is_never_visible() {
        let viewport = Span::new(0.0, 400.0);
        assert_eq!(intersection_ratio(viewport, Span::new(10.0, 10.0)), 0.0);
        assert_eq!(intersection_ratio(viewport, Span::new(20.0, 10.0)), 0.0);
    }

    #[test]
    fn most_visible_skips_non_intersecting() {
        let samples = [
            VisibilitySample::new('a', 0.0),
            VisibilitySample::new('b', 0.3),
            VisibilitySample::new('c', 0.7),
            VisibilitySample::new('d', 0.7),
        ];
        assert_eq!(most_visible(&samples), Some('c'));
        assert_eq!(most_visible(&samples[..1]), None);
        assert_eq!(most_visible::<char>(&[]), None);
    }

    #[test]
    fn fade_in_fires_once_past_threshold() {
        let mut fade = FadeIn::default();
        assert!(!fade.observe(1, 0.1));
        assert!(!fade.is_revealed(&1));
        assert!(fade.would_reveal(&1, 0.2));
        assert!(fade.observe(1, 0.2));
        assert!(!fade.would_reveal(&1, 0.9));
        assert!(fade.is_revealed(&1));
        assert!(!fade.observe(1, 0.9));
        assert!(!fade.observe(2, 0.0));
        assert!(fade.observe(2, 1.0));
    }
}
