use std::collections::HashMap;
use std::time::Duration;

use crate::astar::AStarSolver;
use crate::bfs::BfsSolver;
use crate::cell::Cell;
use crate::grid::MazeState;

/// Résultat d'une résolution. Produit à chaque appel, possédé par
/// l'appelant, jamais partagé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Chemin du départ à l'arrivée inclus, vide si inaccessible.
    pub path: Vec<Cell>,
    /// Chaque case dans l'ordre où l'algorithme l'a retenue,
    /// uniquement pour la visualisation.
    pub visited_order: Vec<Cell>,
    /// Toujours égal à `visited_order.len()`.
    pub visited_count: usize,
    /// Durée de l'appel, mesurée en interne.
    pub elapsed: Duration,
}

/// Interface commune aux deux solveurs, pour que les tests puissent
/// vérifier les mêmes propriétés sur chacun.
pub trait Solver {
    fn name(&self) -> &'static str;

    /// Calcule un plus court chemin sur l'état courant. Lecture seule :
    /// l'état n'est jamais modifié.
    fn solve(&self, state: &MazeState) -> SolveResult;
}

/// Les algorithmes exposés au transport, identifiés par leur nom de route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    AStar,
}

impl Algorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BFS" => Some(Algorithm::Bfs),
            "AStar" => Some(Algorithm::AStar),
            _ => None,
        }
    }

    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver),
            Algorithm::AStar => Box::new(AStarSolver),
        }
    }
}

/// Remonte les liens parents depuis l'arrivée (le départ a un parent
/// `None`) puis renverse pour obtenir le chemin départ -> arrivée.
pub(crate) fn reconstruct_path(
    parents: &HashMap<Cell, Option<Cell>>,
    goal: Cell,
) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(Some(previous)) = parents.get(&current) {
        path.push(*previous);
        current = *previous;
    }
    path.reverse();
    path
}
