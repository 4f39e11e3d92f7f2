use thiserror::Error;

/// Startup failures. Every variant is an initialization-order problem and is
/// reported before the first frame runs.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("particle pool is empty; at least one particle is required")]
    EmptyParticlePool,

    #[error("no renderer attached to the frame loop")]
    MissingRenderer,

    #[error("no camera attached to the frame loop")]
    MissingCamera,

    #[error("no frame scheduler attached to the frame loop")]
    MissingScheduler,

    #[error("no scene attached to the frame loop")]
    MissingScene,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Per-frame render failures surfaced to the host
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

impl RenderError {
    /// Lost or outdated surfaces recover by reconfiguring at the current size
    pub fn needs_reconfigure(&self) -> bool {
        matches!(
            self,
            RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_messages() {
        assert_eq!(
            InitError::EmptyParticlePool.to_string(),
            "particle pool is empty; at least one particle is required"
        );
        assert_eq!(
            InitError::InvalidConfig("floor must be below ceiling".into()).to_string(),
            "invalid config: floor must be below ceiling"
        );
    }

    #[test]
    fn test_surface_errors_that_reconfigure() {
        assert!(RenderError::from(wgpu::SurfaceError::Lost).needs_reconfigure());
        assert!(RenderError::from(wgpu::SurfaceError::Outdated).needs_reconfigure());
        assert!(!RenderError::from(wgpu::SurfaceError::Timeout).needs_reconfigure());
        assert!(!RenderError::from(wgpu::SurfaceError::OutOfMemory).needs_reconfigure());
    }
}
