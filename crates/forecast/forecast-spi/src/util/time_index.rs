/// Default time axis for a window of `n` samples: `[-(n-1), ..., -1, 0]`
///
/// Index 0 is the most recent observation.
pub fn implicit_time_index(n: usize) -> Vec<f64> {
    let last = n as f64 - 1.0;
    (0..n).map(|i| i as f64 - last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_index_ends_at_zero() {
        assert_eq!(implicit_time_index(4), vec![-3.0, -2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_time_index_single_sample() {
        assert_eq!(implicit_time_index(1), vec![0.0]);
    }

    #[test]
    fn test_time_index_empty() {
        assert!(implicit_time_index(0).is_empty());
    }
}
