use crate::engine::{Algorithm, ConstAlgorithm};
use crate::image::{DomainKind, ImageError, Sample, TypedState};

/// Summary statistics of the stored samples of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Collects [`Statistics`] over real values, or complex amplitudes.
#[derive(Debug, Clone, Default)]
pub struct Stat {
    result: Option<Statistics>,
}

impl Stat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last visited image, if any.
    pub fn result(&self) -> Option<Statistics> {
        self.result
    }
}

impl Algorithm for Stat {
    fn name(&self) -> &str {
        "stat"
    }
}

impl ConstAlgorithm for Stat {
    fn visit<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<(), ImageError> {
        let count = state.len();
        let (min, max, sum) = state.data().iter().map(|v| v.magnitude()).fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), m| (min.min(m), max.max(m), sum + m),
        );
        let mean = sum / count as f64;
        let variance = state
            .data()
            .iter()
            .map(|v| (v.magnitude() - mean).powi(2))
            .sum::<f64>()
            / count as f64;
        self.result = Some(Statistics {
            count,
            min,
            max,
            sum,
            mean,
            std_dev: variance.sqrt(),
        });
        Ok(())
    }
}
