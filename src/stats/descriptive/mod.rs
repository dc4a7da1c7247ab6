// Descriptive statistics

use crate::stats::Moments;

pub(crate) fn describe_impl(data: &[f64]) -> Moments {
    Moments {
        count: data.len(),
        mean: mean_impl(data),
        median: median_impl(data),
        std_dev: std_dev_impl(data),
    }
}

pub(crate) fn mean_impl(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median; even-length inputs average the two middle values
pub(crate) fn median_impl(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    Some(median)
}

/// Standard deviation with the unbiased (n - 1) variance estimator
pub(crate) fn std_dev_impl(data: &[f64]) -> Option<f64> {
    let count = data.len();
    if count < 2 {
        return None;
    }

    let mean = data.iter().sum::<f64>() / count as f64;
    let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();

    Some((sum_squared_diff / (count - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let moments = describe_impl(&data);

        assert_eq!(moments.count, 5);
        assert!((moments.mean.unwrap() - 3.0).abs() < 1e-10);
        assert!((moments.median.unwrap() - 3.0).abs() < 1e-10);
        assert!((moments.std_dev.unwrap() - 1.5811388300841898).abs() < 1e-10);
    }

    #[test]
    fn test_describe_empty() {
        let moments = describe_impl(&[]);
        assert_eq!(moments.count, 0);
        assert!(moments.mean.is_none());
        assert!(moments.median.is_none());
        assert!(moments.std_dev.is_none());
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let moments = describe_impl(&[7.0]);
        assert_eq!(moments.mean, Some(7.0));
        assert_eq!(moments.median, Some(7.0));
        assert_eq!(moments.std_dev, None);
    }

    #[test]
    fn test_median_even_and_unsorted() {
        assert_eq!(median_impl(&[9.0, 1.0, 5.0, 3.0]), Some(4.0));
        assert_eq!(median_impl(&[3.0, 1.0, 2.0]), Some(2.0));
    }
}
