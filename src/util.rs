use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use bincode::{config, Decode, Encode};

use crate::error::MondError;

/// Iterates over `10^x`, for x stepped from `start` to `end` inclusive. We compute each
/// exponent from its index instead of accumulating the step, so the point count doesn't
/// depend on rounding.
#[derive(Clone, Debug)]
pub struct LogSteps {
    start: f64,
    step: f64,
    i: usize,
    n: usize,
}

impl LogSteps {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        let n = ((end - start) / step).round() as usize + 1;
        Self { start, step, i: 0, n }
    }
}

impl Iterator for LogSteps {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n {
            return None;
        }
        let exp = self.start + self.i as f64 * self.step;
        self.i += 1;

        Some(10f64.powf(exp))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LogSteps {}

/// Save to file, using Bincode.
pub fn save<T: Encode>(path: &Path, data: &T) -> Result<(), MondError> {
    let encoded: Vec<u8> = bincode::encode_to_vec(data, config::standard())?;

    let mut file = File::create(path)?;
    file.write_all(&encoded)?;
    Ok(())
}

/// Load from file, using Bincode.
pub fn load<T: Decode<()>>(path: &Path) -> Result<T, MondError> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let (decoded, _len) = bincode::decode_from_slice(&buffer, config::standard())?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_steps_inclusive() {
        let vals: Vec<f64> = LogSteps::new(0., 2., 0.5).collect();
        assert_eq!(vals.len(), 5);
        assert_eq!(vals[0], 1.);
        assert!((vals[4] - 100.).abs() < 1e-12);
        assert!((vals[1] - 10f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn log_steps_size_hint() {
        let mut steps = LogSteps::new(-12., -8., 0.1);
        assert_eq!(steps.len(), 41);
        steps.next();
        assert_eq!(steps.len(), 40);
    }
}
