use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::cell::Cell;
use crate::grid::MazeState;
use crate::solver::{reconstruct_path, SolveResult, Solver};

/// Parcours en largeur : plus court chemin garanti sur une grille non
/// pondérée.
///
/// Une case entre dans `visited_order` au moment où elle est découverte
/// (mise en file), pas quand elle est défilée. C'est ce qui donne à la
/// visualisation son front d'onde régulier.
pub struct BfsSolver;

impl Solver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn solve(&self, state: &MazeState) -> SolveResult {
        let started = Instant::now();
        let start = state.start();
        let goal = state.goal();

        // la table des parents sert aussi d'ensemble des cases vues
        let mut parents: HashMap<Cell, Option<Cell>> = HashMap::new();
        let mut queue: VecDeque<Cell> = VecDeque::new();
        let mut visited_order = Vec::new();
        let mut path = Vec::new();

        parents.insert(start, None);
        queue.push_back(start);
        visited_order.push(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                path = reconstruct_path(&parents, goal);
                break;
            }
            for next in state.grid().passable_neighbors(current) {
                if !parents.contains_key(&next) {
                    parents.insert(next, Some(current));
                    queue.push_back(next);
                    visited_order.push(next);
                }
            }
        }

        SolveResult {
            path,
            visited_count: visited_order.len(),
            visited_order,
            elapsed: started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::tests::open_room;

    #[test]
    fn test_discovery_order_is_fixed() {
        // intérieur 2x2 : depuis (1,1) on découvre +ligne avant +colonne
        let state = MazeState::new(open_room(4, 4), Cell::new(1, 1), Cell::new(2, 2));
        let result = BfsSolver.solve(&state);
        assert_eq!(
            result.visited_order,
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(
            result.path,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2)]
        );
    }

    #[test]
    fn test_corridor_is_walked_end_to_end() {
        let mut grid = crate::grid::Grid::filled(3, 6);
        for y in 1..5 {
            grid.open(1, y);
        }
        let state = MazeState::new(grid, Cell::new(1, 1), Cell::new(1, 4));
        let result = BfsSolver.solve(&state);
        let corridor: Vec<Cell> = (1..5).map(|y| Cell::new(1, y)).collect();
        assert_eq!(result.visited_order, corridor);
        assert_eq!(result.path, corridor);
        assert_eq!(result.visited_count, 4);
    }

    #[test]
    fn test_start_equal_goal() {
        let state = MazeState::new(open_room(3, 3), Cell::new(1, 1), Cell::new(1, 1));
        let result = BfsSolver.solve(&state);
        assert_eq!(result.path, vec![Cell::new(1, 1)]);
        assert_eq!(result.visited_order, vec![Cell::new(1, 1)]);
    }
}
