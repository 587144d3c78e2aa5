#![allow(dead_code)]

use market_structure::domain::trading::types::Candle;

/// Candle around `close` with a 0.1 body in the direction of `step` and
/// wicks of 0.5 on each side.
pub fn bar(time: i64, close: f64, step: f64) -> Candle {
    Candle {
        time,
        open: close - 0.1 * step.signum(),
        high: close + 0.5,
        low: close - 0.5,
        close,
        volume: 10.0,
    }
}

/// Zig-zag series: `up` bars rising by `rise`, then `down` bars falling by
/// `fall`, repeated `cycles` times, then one more up leg.
pub fn zigzag(cycles: usize, up: usize, rise: f64, down: usize, fall: f64) -> Vec<Candle> {
    let mut steps = Vec::new();
    for _ in 0..cycles {
        steps.extend(std::iter::repeat_n(rise, up));
        steps.extend(std::iter::repeat_n(-fall, down));
    }
    steps.extend(std::iter::repeat_n(rise, up));

    let mut price = 100.0;
    let mut candles = vec![bar(0, price, 1.0)];
    for (i, step) in steps.into_iter().enumerate() {
        price += step;
        candles.push(bar(i as i64 + 1, price, step));
    }
    candles
}
