use thiserror::Error;

/// Erreurs du domaine. Les buts inaccessibles ne sont pas des erreurs :
/// les solveurs renvoient un chemin vide dans ce cas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("grid {rows}x{cols} is too small to carve an interior")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("invalid value {value:?} for {name}")]
    BadConfig { name: &'static str, value: String },
}
