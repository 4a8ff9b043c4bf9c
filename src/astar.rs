use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::cell::Cell;
use crate::grid::MazeState;
use crate::solver::{reconstruct_path, SolveResult, Solver};

/// Entrée de la file de priorité : (f, g, x, y). L'ordre lexicographique
/// du tuple départage les ex aequo sur f par g croissant puis par
/// coordonnées, comme dans l'implémentation de référence.
type Node = (usize, usize, usize, usize);

/// A* avec heuristique de Manhattan, admissible et consistante sur une
/// grille 4-connexe non pondérée : la longueur trouvée est la même que
/// celle du BFS, l'exploration est juste tirée vers l'arrivée.
///
/// Contrairement au BFS, une case entre dans `visited_order` quand elle
/// est dépilée et finalisée, pas quand elle est découverte. L'asymétrie
/// est voulue : elle est visible dans la visualisation.
pub struct AStarSolver;

impl Solver for AStarSolver {
    fn name(&self) -> &'static str {
        "AStar"
    }

    fn solve(&self, state: &MazeState) -> SolveResult {
        let started = Instant::now();
        let start = state.start();
        let goal = state.goal();

        let mut heap: BinaryHeap<Reverse<Node>> = BinaryHeap::new();
        let mut gscore: HashMap<Cell, usize> = HashMap::new();
        let mut parents: HashMap<Cell, Option<Cell>> = HashMap::new();
        let mut finalized: HashSet<Cell> = HashSet::new();
        let mut visited_order = Vec::new();
        let mut path = Vec::new();

        heap.push(Reverse((start.manhattan(goal), 0, start.x, start.y)));
        gscore.insert(start, 0);
        parents.insert(start, None);

        while let Some(Reverse((_f, g, x, y))) = heap.pop() {
            let current = Cell::new(x, y);
            // suppression paresseuse : les entrées périmées laissées par
            // les relaxations successives sont simplement ignorées
            if !finalized.insert(current) {
                continue;
            }
            visited_order.push(current);

            if current == goal {
                path = reconstruct_path(&parents, goal);
                break;
            }

            for next in state.grid().passable_neighbors(current) {
                let tentative = g + 1;
                if gscore.get(&next).map_or(true, |&known| tentative < known) {
                    gscore.insert(next, tentative);
                    parents.insert(next, Some(current));
                    heap.push(Reverse((
                        tentative + next.manhattan(goal),
                        tentative,
                        next.x,
                        next.y,
                    )));
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
