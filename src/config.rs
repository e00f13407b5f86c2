use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    curve_error::{CurveError, CurveResult, WithContext},
    curves::{algorithm::Algorithm, control_points::ControlPoints},
    projects::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS, ORDINATE_RANGE, RESET_ORDINATE},
    rasterize::curve::{DEFAULT_SAMPLE_COUNT, sample_with},
};

/// Everything a host needs to draw one curve: the control ordinates, how
/// finely to sample and which evaluation algorithm to use.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub control_points: Vec<f64>,
    pub sample_count: usize,
    pub algorithm: Algorithm,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            control_points: vec![RESET_ORDINATE; 3],
            sample_count: DEFAULT_SAMPLE_COUNT,
            algorithm: Algorithm::Nli,
        }
    }
}

impl SessionConfig {
    pub fn control_points(&self) -> CurveResult<ControlPoints<f64>> {
        ControlPoints::try_new(self.control_points.clone())
    }

    /// Logs a warning for values an interactive editor could not have
    /// produced. They are still evaluated.
    pub fn warn_outside_editor_limits(&self) {
        let count = self.control_points.len();
        if !(MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS).contains(&count) {
            warn!(
                count,
                "control point count outside the editor range {}..={}",
                MIN_CONTROL_POINTS,
                MAX_CONTROL_POINTS
            );
        }
        for (i, y) in self.control_points.iter().enumerate() {
            if !ORDINATE_RANGE.contains(y) {
                warn!(index = i, y, "control point outside the editor range");
            }
        }
    }

    pub fn sample(&self) -> CurveResult<Vec<DVec2>> {
        let points = self.control_points()?;
        sample_with(points.as_slice(), self.sample_count, self.algorithm)
    }
}

pub fn load_session_from_file(path: &Path) -> CurveResult<SessionConfig> {
    let context =
        |err: CurveError| err.with_context(format!("loading session from {}", path.display()));

    let s = std::fs::read_to_string(path)
        .map_err(CurveError::from)
        .with_context(&context)?;
    let session: SessionConfig = serde_yaml::from_str(&s)
        .map_err(CurveError::from)
        .with_context(&context)?;
    debug!(?path, ?session, "loaded session");
    Ok(session)
}

pub fn write_session_to_file(path: &Path, session: &SessionConfig) -> CurveResult<()> {
    let context =
        |err: CurveError| err.with_context(format!("writing session to {}", path.display()));

    let s = serde_yaml::to_string(session)
        .map_err(CurveError::from)
        .with_context(&context)?;
    std::fs::write(path, s)
        .map_err(CurveError::from)
        .with_context(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_error::CurveErrorKind;
    use approx::assert_relative_eq;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("curvelab_{}_{}.yaml", name, std::process::id()))
    }

    #[test]
    fn test_default_session() -> CurveResult<()> {
        let session = SessionConfig::default();
        assert_eq!(session.control_points, vec![1.0, 1.0, 1.0]);
        assert_eq!(session.sample_count, 200);
        assert_eq!(session.algorithm, Algorithm::Nli);

        let samples = session.sample()?;
        assert_eq!(samples.len(), 200);
        for p in samples {
            assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<(), serde_yaml::Error> {
        let session: SessionConfig = serde_yaml::from_str("algorithm: bb\nsample_count: 3\n")?;
        assert_eq!(session.algorithm, Algorithm::Bb);
        assert_eq!(session.sample_count, 3);
        assert_eq!(session.control_points, vec![1.0, 1.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_session_file_round_trip() -> CurveResult<()> {
        let path = temp_path("round_trip");
        let session = SessionConfig {
            control_points: vec![0.0, 2.0, 0.0],
            sample_count: 3,
            algorithm: Algorithm::Bb,
        };
        write_session_to_file(&path, &session)?;
        let loaded = load_session_from_file(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(loaded, session);
        let samples = loaded.sample()?;
        assert_eq!(samples[0], DVec2::new(0.0, 0.0));
        assert_eq!(samples[2], DVec2::new(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_session_from_file(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.kind(), CurveErrorKind::Config);
        assert_eq!(err.context().len(), 1);
    }

    #[test]
    fn test_empty_session_fails_to_sample() {
        let session = SessionConfig {
            control_points: vec![],
            ..SessionConfig::default()
        };
        assert_eq!(
            session.sample().unwrap_err().kind(),
            CurveErrorKind::InvalidInput
        );
    }
}
