use crate::types::RenderError;

/// Error state owned by a single boundary.
///
/// `Idle` renders the protected children; `Errored` renders the fallback or the
/// generic error page. There is no other rendering mode.
#[derive(Debug, Clone, Default)]
pub enum BoundaryState {
    #[default]
    Idle,
    Errored(RenderError),
}

impl BoundaryState {
    #[inline]
    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }

    #[inline]
    pub fn error(&self) -> Option<&RenderError> {
        match self {
            Self::Idle => None,
            Self::Errored(error) => Some(error),
        }
    }
}
