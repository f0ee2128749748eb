//! Sample series paired with its synthetic time axis.

use crate::config::TIME_INTERVAL_MS;

/// Timestamps for `len` samples spaced `interval_ms` apart, starting at 0.
pub fn time_labels(len: usize, interval_ms: u64) -> Vec<u64> {
    (0..len as u64).map(|i| i * interval_ms).collect()
}

/// Parsed values and their timestamps. Both always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    times: Vec<u64>,
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            times: time_labels(values.len(), TIME_INTERVAL_MS),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn times(&self) -> &[u64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `[time, value]` pairs, ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&t, &v)| [t as f64, v])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_axis_counts_from_zero() {
        assert_eq!(time_labels(4, 1), vec![0, 1, 2, 3]);
        assert_eq!(time_labels(3, 5), vec![0, 5, 10]);
        assert!(time_labels(0, 1).is_empty());
    }

    #[test]
    fn series_lengths_match() {
        let series = SampleSeries::new(vec![1.0, 2.5, 3.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.times(), &[0, 1, 2]);
        assert_eq!(series.points(), vec![[0.0, 1.0], [1.0, 2.5], [2.0, 3.0]]);

        let empty = SampleSeries::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.times().is_empty());
    }
}
