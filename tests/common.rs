pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

pub fn variance(samples: &[f64]) -> f64 {
    let m = mean(samples);
    samples.iter().map(|s| (s - m) * (s - m)).sum::<f64>() / samples.len() as f64
}
