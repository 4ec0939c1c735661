use crate::core::geom::{
    self, DEFAULT_EPSILON, GeometryError, Line2, Line3, LineLineInteraction, Plane, TryInvert,
    Vec2, Vec3,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Scaling applied by the discrete Fourier transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Forward unscaled, inverse scaled by `1/N`.
    #[default]
    Backward,
    /// Forward scaled by `1/N`, inverse unscaled.
    Forward,
    /// Both directions scaled by `1/sqrt(N)`.
    Unitary,
}

impl Normalization {
    /// Factor applied after a transform over `n` samples.
    pub fn factor(self, n: usize, inverse: bool) -> f64 {
        let n = n as f64;
        match (self, inverse) {
            (Self::Backward, false) | (Self::Forward, true) => 1.0,
            (Self::Backward, true) | (Self::Forward, false) => 1.0 / n,
            (Self::Unitary, _) => 1.0 / n.sqrt(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    pub epsilon: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Geometry queries evaluated with the configured tolerance.
impl GeometryConfig {
    pub fn line_line_interaction(
        &self,
        line_a: &Line3,
        line_b: &Line3,
    ) -> Result<LineLineInteraction, GeometryError> {
        geom::line_line_interaction(line_a, line_b, self.epsilon)
    }

    pub fn are_intersecting(&self, line_a: &Line3, line_b: &Line3) -> bool {
        geom::are_intersecting(line_a, line_b, self.epsilon)
    }

    pub fn intersect_lines_2d(&self, line_a: &Line2, line_b: &Line2) -> Result<Vec2, GeometryError> {
        geom::intersect_lines_2d(line_a, line_b, self.epsilon)
    }

    pub fn intersect_line_plane(&self, line: &Line3, plane: &Plane) -> Result<Vec3, GeometryError> {
        geom::intersect_line_plane(line, plane, self.epsilon)
    }

    pub fn intersect_planes(&self, a: &Plane, b: &Plane) -> Result<Line3, GeometryError> {
        geom::intersect_planes(a, b, self.epsilon)
    }

    pub fn plane_contains(&self, plane: &Plane, point: &Vec3) -> bool {
        plane.contains(point, self.epsilon)
    }

    pub fn try_invert<M: TryInvert>(&self, m: &M) -> Result<M, GeometryError> {
        m.try_invert(self.epsilon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    pub normalization: Normalization,
}

/// Toolkit-wide numeric settings.
///
/// ```toml
/// [geometry]
/// epsilon = 1e-9
///
/// [transform]
/// normalization = "unitary"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    pub geometry: GeometryConfig,
    pub transform: TransformConfig,
}

impl ToolkitConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: path.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let epsilon = self.geometry.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "epsilon",
                reason: format!("must be finite and non-negative, got {epsilon}"),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ToolkitConfigBuilder {
    epsilon: Option<f64>,
    normalization: Option<Normalization>,
}

impl ToolkitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    pub fn build(self) -> Result<ToolkitConfig, ConfigError> {
        let config = ToolkitConfig {
            geometry: GeometryConfig {
                epsilon: self.epsilon.unwrap_or(DEFAULT_EPSILON),
            },
            transform: TransformConfig {
                normalization: self.normalization.unwrap_or_default(),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ToolkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.geometry.epsilon, 1e-12);
        assert_eq!(config.transform.normalization, Normalization::Backward);
    }

    #[test]
    fn load_reads_both_sections_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[geometry]\nepsilon = 1e-6\n\n[transform]\nnormalization = \"unitary\"\n"
        )
        .unwrap();

        let config = ToolkitConfig::load(file.path()).unwrap();
        assert_eq!(config.geometry.epsilon, 1e-6);
        assert_eq!(config.transform.normalization, Normalization::Unitary);
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match ToolkitConfig::load(&path) {
            Err(ConfigError::Io { path: p, .. }) => assert!(p.ends_with("absent.toml")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_and_bad_values_are_rejected() {
        assert!(matches!(
            ToolkitConfig::from_toml_str("[geometry]\ntolerance = 1.0\n"),
            Err(ConfigError::Toml { .. })
        ));
        assert!(matches!(
            ToolkitConfig::from_toml_str("[transform]\nnormalization = \"ortho\"\n"),
            Err(ConfigError::Toml { .. })
        ));
        assert!(matches!(
            ToolkitConfig::from_toml_str("[geometry]\nepsilon = -1.0\n"),
            Err(ConfigError::InvalidParameter { name: "epsilon", .. })
        ));
    }

    #[test]
    fn builder_fills_defaults_and_validates() {
        let config = ToolkitConfigBuilder::new()
            .normalization(Normalization::Forward)
            .build()
            .unwrap();
        assert_eq!(config.geometry.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.transform.normalization, Normalization::Forward);

        assert!(ToolkitConfigBuilder::new().epsilon(f64::NAN).build().is_err());
    }

    #[test]
    fn geometry_queries_use_configured_epsilon() {
        let loose = ToolkitConfigBuilder::new().epsilon(1e-3).build().unwrap();
        let strict = ToolkitConfig::default();

        let x_axis = Line3::from_direction(Vec3::zeros(), Vec3::x()).unwrap();
        let shallow = Line3::from_direction(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.01, 0.0))
            .unwrap();
        assert!(matches!(
            loose.geometry.line_line_interaction(&x_axis, &shallow),
            Err(GeometryError::Parallel(_))
        ));
        let closest = strict.geometry.line_line_interaction(&x_axis, &shallow).unwrap();
        assert!((closest.distance - 1.0).abs() < 1e-9);

        let nearly_singular = geom::Mat2::new(1.0, 0.0, 0.0, 1e-4);
        assert!(matches!(
            loose.geometry.try_invert(&nearly_singular),
            Err(GeometryError::SingularMatrix { .. })
        ));
        assert!(strict.geometry.try_invert(&nearly_singular).is_ok());

        let floor = Plane::from_normal(Vec3::zeros(), Vec3::z()).unwrap();
        assert!(loose.geometry.plane_contains(&floor, &Vec3::new(5.0, 5.0, 5e-4)));
        assert!(!strict.geometry.plane_contains(&floor, &Vec3::new(5.0, 5.0, 5e-4)));
    }

    #[test]
    fn normalization_factors_multiply_to_one_over_n() {
        for norm in [
            Normalization::Backward,
            Normalization::Forward,
            Normalization::Unitary,
        ] {
            let product = norm.factor(16, false) * norm.factor(16, true);
            assert!((product - 1.0 / 16.0).abs() < 1e-15);
        }
    }
}
