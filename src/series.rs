use serde::Serialize;

/// An ordered period-label to value mapping, the common currency between
/// section extraction and charting. Insertion order mirrors the column
/// order of the source report, which is why this is a vector of pairs and
/// not a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodSeries {
    entries: Vec<(String, f64)>,
}

impl PeriodSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip labels to values positionally. Values shorter than the label row
    /// pad with trailing zeros; extra values are dropped. Positional
    /// alignment is the contract: the upstream report guarantees column
    /// order consistency between the period-label row and every data row.
    pub fn from_labels_values<L: AsRef<str>>(labels: &[L], values: &[f64]) -> Self {
        let entries = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let value = values.get(i).copied().unwrap_or(0.0);
                (label.as_ref().to_string(), value)
            })
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push((label.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Value of the most recent period, 0.0 when the series is empty.
    pub fn latest(&self) -> f64 {
        self.entries.last().map(|(_, v)| *v).unwrap_or(0.0)
    }

    /// The two most recent adjacent periods as (previous, current).
    /// `None` unless the series has at least two entries.
    pub fn last_two(&self) -> Option<(f64, f64)> {
        let n = self.entries.len();
        if n < 2 {
            return None;
        }
        Some((self.entries[n - 2].1, self.entries[n - 1].1))
    }

    /// Keep only entries whose label is in `selected`, preserving the
    /// series' own order regardless of selection order. Places no cap on
    /// the selection size; comparison-set limits live at the UI boundary.
    pub fn filter_by<S: AsRef<str>>(&self, selected: &[S]) -> PeriodSeries {
        let entries = self
            .entries
            .iter()
            .filter(|(label, _)| selected.iter().any(|s| s.as_ref() == label))
            .cloned()
            .collect();
        Self { entries }
    }

    /// Add another series into this one, aligning by label. Labels missing
    /// here are appended in the other series' order.
    pub fn merge_add(&mut self, other: &PeriodSeries) {
        for (label, value) in other.iter() {
            match self.entries.iter_mut().find(|(l, _)| l == label) {
                Some(entry) => entry.1 += value,
                None => self.entries.push((label.to_string(), value)),
            }
        }
    }
}
