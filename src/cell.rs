use serde::{Deserialize, Serialize};

/// Une case du labyrinthe, identifiée par ses coordonnées.
///
/// `x` est la ligne, `y` la colonne (convention du format d'échange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Distance de Manhattan jusqu'à `other`.
    pub fn manhattan(&self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}
