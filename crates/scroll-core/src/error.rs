use thiserror::Error;

/// Errors surfaced by the scene core. The update step itself never fails;
/// these come from parsing values handed in by a control surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("invalid color {0:?}: expected #rrggbb or #rgb")]
    InvalidColor(String),
}
