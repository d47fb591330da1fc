/// Which end of each interval is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedSide {
    /// [lower, upper) — lower bound included
    Left,
    /// (lower, upper] — upper bound included
    Right,
}

/// An ordered list of (lower, upper, label) bins sharing one closed-side
/// rule. Values outside every bin classify to `None`, never to the nearest
/// bin.
#[derive(Debug, Clone)]
pub struct IntervalTable {
    closed: ClosedSide,
    bins: Vec<(f64, f64, &'static str)>,
}

impl IntervalTable {
    pub fn new(closed: ClosedSide, bins: Vec<(f64, f64, &'static str)>) -> Self {
        Self { closed, bins }
    }

    /// Build contiguous bins from monotonically increasing edges. There
    /// must be exactly one more edge than labels.
    pub fn from_edges(closed: ClosedSide, edges: &[f64], labels: &[&'static str]) -> Self {
        assert_eq!(edges.len(), labels.len() + 1, "one more edge than labels");
        let bins = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (edges[i], edges[i + 1], *label))
            .collect();
        Self { closed, bins }
    }

    pub fn classify(&self, value: f64) -> Option<&'static str> {
        self.bins
            .iter()
            .find(|(lower, upper, _)| match self.closed {
                ClosedSide::Left => value >= *lower && value < *upper,
                ClosedSide::Right => value > *lower && value <= *upper,
            })
            .map(|(_, _, label)| *label)
    }
}
