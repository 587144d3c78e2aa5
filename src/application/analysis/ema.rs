use serde::{Deserialize, Serialize};

/// EMA values for one period, aligned index-for-index with the input closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaSeries {
    pub period: usize,
    pub values: Vec<Option<f64>>,
}

impl EmaSeries {
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// Exponential moving average over closes.
///
/// The seed is the SMA of the first `min(period, n)` closes, placed at index
/// `min(period, n) - 1`; every later index uses `k = 2 / (period + 1)`.
/// Indices before the seed stay `None`. A zero period yields no values.
pub fn calc_ema(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut ema = vec![None; n];
    if n == 0 || period == 0 {
        return ema;
    }

    let seed_len = period.min(n);
    let seed = closes[..seed_len].iter().sum::<f64>() / seed_len as f64;
    ema[seed_len - 1] = Some(seed);

    let k = 2.0 / (period as f64 + 1.0);
    let mut prev = seed;
    for i in period..n {
        prev = closes[i] * k + prev * (1.0 - k);
        ema[i] = Some(prev);
    }

    ema
}
