use crate::core::lattice::{Extent, Point};
use crate::engine::{Algorithm, Normalization, OutOfPlaceAlgorithm, ToolkitConfig};
use crate::image::{
    Complex, Domain, DomainKind, Frequency, HalfFrequency, ImageError, ImageState, Sample,
    Spatial, TypedState, ValueType, Variant,
};
use std::f64::consts::TAU;
use tracing::{debug, instrument};

/// Separable discrete Fourier transform between spatial and frequency data.
///
/// The direction follows the input: real spatial data becomes complex
/// half-frequency data, complex spatial data becomes complex frequency data,
/// and both frequency forms transform back to the spatial form they came
/// from. Frequency indices are centered, and phases use absolute coordinates
/// on both sides, so the spectrum carries the position of the spatial extent:
///
/// `F(k) = sum_x f(x) exp(-2 pi i k.x / N)`.
///
/// Frequency data remembers the spatial origin, which the inverse uses to
/// restore the original extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dft {
    pub normalization: Normalization,
}

impl Dft {
    pub fn new(normalization: Normalization) -> Self {
        Self { normalization }
    }

    pub fn from_config(config: &ToolkitConfig) -> Self {
        Self::new(config.transform.normalization)
    }
}

impl Algorithm for Dft {
    fn name(&self) -> &str {
        "dft"
    }

    fn supports(&self, variant: Variant) -> bool {
        variant.value_type == ValueType::Complex || variant.domain == Domain::Spatial
    }
}

impl OutOfPlaceAlgorithm for Dft {
    #[instrument(skip_all, name = "dft", fields(variant = %state.variant()))]
    fn visit_into<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<ImageState, ImageError> {
        let logical = state.logical_extent();
        let size = logical.size();
        let sampling = state.sampling();

        if D::DOMAIN == Domain::Spatial {
            let spectrum = Extent::centered(size)?;
            let mut buf: Vec<Complex<f64>> = state.data().iter().map(|v| v.to_complex()).collect();
            transform(&mut buf, logical, spectrum.start(), -1.0);
            let factor = self.normalization.factor(buf.len(), false);
            normalize(&mut buf, factor);
            debug!(%spectrum, "Forward transform complete.");

            let out: ImageState = match T::VALUE_TYPE {
                ValueType::Complex => {
                    let mut out =
                        TypedState::<Complex<f64>, Frequency>::from_data(spectrum, sampling, buf)?;
                    out.set_spatial_origin(logical.start());
                    out.into()
                }
                ValueType::Real => {
                    let mut out = TypedState::<Complex<f64>, HalfFrequency>::new(spectrum, sampling)?;
                    out.set_spatial_origin(logical.start());
                    // Stored points include the Nyquist plane at +n/2, which
                    // is addressed by buffer position rather than logically.
                    let storage = out.extent();
                    for (q, slot) in storage.iter().zip(out.data_mut()) {
                        let i = spectrum.index_of(spectrum.wrap_point(q)).ok_or(
                            ImageError::OutOfBounds {
                                point: q,
                                extent: spectrum,
                            },
                        )?;
                        *slot = buf[i];
                    }
                    out.into()
                }
            };
            return Ok(out);
        }

        let spatial = Extent::from_size(state.spatial_origin(), size)?;
        let mut buf = logical
            .iter()
            .map(|p| state.value(p).map(T::to_complex))
            .collect::<Result<Vec<_>, _>>()?;
        transform(&mut buf, logical, spatial.start(), 1.0);
        let factor = self.normalization.factor(buf.len(), true);
        normalize(&mut buf, factor);
        debug!(%spatial, "Inverse transform complete.");

        let out: ImageState = match D::DOMAIN {
            Domain::HalfFrequency => {
                let real = buf.iter().map(|c| c.re).collect();
                TypedState::<f64, Spatial>::from_data(spatial, sampling, real)?.into()
            }
            _ => TypedState::<Complex<f64>, Spatial>::from_data(spatial, sampling, buf)?.into(),
        };
        Ok(out)
    }
}

fn normalize(buf: &mut [Complex<f64>], factor: f64) {
    if factor != 1.0 {
        buf.iter_mut().for_each(|c| *c *= factor);
    }
}

/// Transforms `buf`, laid out in scan order of `input`, in place along every
/// axis of more than one sample. Output indices start at `output_start` and
/// share the input size.
fn transform(buf: &mut [Complex<f64>], input: Extent, output_start: Point, sign: f64) {
    let dims = input.size().to_array();
    let strides = [dims[1] * dims[2], dims[2], 1];
    let mut line = Vec::new();

    for axis in 0..3 {
        let n = dims[axis];
        if n < 2 {
            continue;
        }
        let twiddles = twiddles(n, input.start()[axis], output_start[axis], sign);
        let stride = strides[axis];
        for base in (0..buf.len()).filter(|i| (i / stride) % n == 0) {
            line.clear();
            line.extend((0..n).map(|i| buf[base + i * stride]));
            for (j, row) in twiddles.chunks_exact(n).enumerate() {
                buf[base + j * stride] = line.iter().zip(row).map(|(v, w)| v * w).sum();
            }
        }
    }
}

/// Row `j` holds `exp(sign * 2 pi i * (a + i) * (b + j) / n)` for every `i`.
fn twiddles(n: usize, a: i32, b: i32, sign: f64) -> Vec<Complex<f64>> {
    let n64 = n as i64;
    (0..n64)
        .flat_map(|j| {
            (0..n64).map(move |i| {
                let m = ((a as i64 + i) * (b as i64 + j)).rem_euclid(n64);
                Complex::from_polar(1.0, sign * TAU * m as f64 / n64 as f64)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::Size;
    use crate::engine::dispatch::apply;
    use crate::image::{PixelSampling, Value};

    const TOL: f64 = 1e-9;

    fn assert_close(a: Complex<f64>, b: Complex<f64>) {
        assert!((a - b).norm() < TOL, "{a} != {b}");
    }

    fn line(values: &[f64], start: i32) -> ImageState {
        let extent = Extent::from_size(
            Point::new(start, 0, 0),
            Size::new(values.len(), 1, 1).unwrap(),
        )
        .unwrap();
        let mut s =
            ImageState::new(extent, ValueType::Real, Domain::Spatial, PixelSampling::default())
                .unwrap();
        for (p, v) in extent.iter().zip(values) {
            s.set_value(p, Value::Real(*v)).unwrap();
        }
        s
    }

    fn complex_at(s: &ImageState, x: i32) -> Complex<f64> {
        s.get_value(Point::new(x, 0, 0)).unwrap().as_complex().unwrap()
    }

    #[test]
    fn real_line_transforms_to_half_spectrum() {
        let s = line(&[1.0, 2.0, 3.0, 4.0], 0);
        let f = apply(&s, &mut Dft::default()).unwrap();
        assert_eq!(f.variant(), Variant::new(ValueType::Complex, Domain::HalfFrequency));
        assert_eq!(f.extent(), Extent::new(Point::new(-2, 0, 0), Point::new(1, 0, 0)));
        assert_eq!(f.spatial_origin(), Point::ORIGIN);

        assert_close(complex_at(&f, 0), Complex::new(10.0, 0.0));
        assert_close(complex_at(&f, 1), Complex::new(-2.0, 2.0));
        assert_close(complex_at(&f, -1), Complex::new(-2.0, -2.0));
        assert_close(complex_at(&f, -2), Complex::new(-2.0, 0.0));
    }

    #[test]
    fn shifted_origin_changes_phase_only() {
        let a = apply(&line(&[1.0, 0.0, 0.0], 0), &mut Dft::default()).unwrap();
        let b = apply(&line(&[1.0, 0.0, 0.0], 1), &mut Dft::default()).unwrap();
        for k in -1..=1 {
            assert_close(complex_at(&a, k), Complex::new(1.0, 0.0));
            let expected = Complex::from_polar(1.0, -TAU * k as f64 / 3.0);
            assert_close(complex_at(&b, k), expected);
        }
    }

    #[test]
    fn inverse_restores_extent_and_values() {
        for normalization in [
            Normalization::Backward,
            Normalization::Forward,
            Normalization::Unitary,
        ] {
            let mut dft = Dft::new(normalization);
            let s = line(&[0.5, -1.0, 2.0, 4.0, 3.5], -3);
            let back = apply(&apply(&s, &mut dft).unwrap(), &mut dft).unwrap();
            assert_eq!(back.variant(), s.variant());
            assert_eq!(back.extent(), s.extent());
            for p in s.points() {
                let a = back.get_value(p).unwrap().as_real().unwrap();
                let b = s.get_value(p).unwrap().as_real().unwrap();
                assert!((a - b).abs() < TOL);
            }
        }
    }

    #[test]
    fn real_frequency_data_is_unsupported() {
        let extent = Extent::centered(Size::new(4, 1, 1).unwrap()).unwrap();
        let s = ImageState::new(extent, ValueType::Real, Domain::Frequency, PixelSampling::default())
            .unwrap();
        assert!(matches!(
            apply(&s, &mut Dft::default()),
            Err(ImageError::UnsupportedVariant { .. })
        ));
    }
}
