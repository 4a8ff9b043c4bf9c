use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::MazeState;
use crate::solver::SolveResult;

/// L'enregistrement neutre remis au transport : l'état du labyrinthe,
/// plus les champs de résolution quand un `SolveResult` l'accompagne.
/// Les noms de champs sont le contrat d'échange, ne pas les renommer.
///
/// Ce module ne sait rien de HTTP; le transport se contente d'encoder
/// l'enregistrement en JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Matrice ligne par ligne, 0 = ouvert, 1 = mur.
    pub maze: Vec<Vec<u8>>,
    pub start: Cell,
    pub goal: Cell,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Cell>>,
    #[serde(rename = "visitedNodes", default, skip_serializing_if = "Option::is_none")]
    pub visited_nodes: Option<usize>,
    #[serde(rename = "timeMs", default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
    #[serde(rename = "pathLength", default, skip_serializing_if = "Option::is_none")]
    pub path_length: Option<usize>,
    #[serde(rename = "visitedOrder", default, skip_serializing_if = "Option::is_none")]
    pub visited_order: Option<Vec<Cell>>,
}

impl MazeSnapshot {
    /// Instantané du labyrinthe seul, sans champs de résolution.
    pub fn of_state(state: &MazeState) -> Self {
        Self {
            rows: state.grid().rows(),
            cols: state.grid().cols(),
            maze: state.grid().occupancy(),
            start: state.start(),
            goal: state.goal(),
            path: None,
            visited_nodes: None,
            time_ms: None,
            path_length: None,
            visited_order: None,
        }
    }

    /// Instantané accompagné d'un résultat de résolution. Comme dans le
    /// format d'origine, un chemin ou une trace vides sont omis plutôt
    /// qu'émis comme tableaux vides.
    pub fn with_result(state: &MazeState, result: &SolveResult) -> Self {
        let mut snapshot = Self::of_state(state);
        snapshot.path = if result.path.is_empty() {
            None
        } else {
            Some(result.path.clone())
        };
        snapshot.visited_nodes = Some(result.visited_count);
        snapshot.time_ms = Some(result.elapsed.as_secs_f64() * 1000.0);
        snapshot.path_length = Some(result.path.len());
        snapshot.visited_order = if result.visited_order.is_empty() {
            None
        } else {
            Some(result.visited_order.clone())
        };
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use std::time::Duration;

    fn tiny_state() -> MazeState {
        let mut grid = Grid::filled(3, 3);
        grid.open(1, 1);
        MazeState::new(grid, Cell::new(1, 1), Cell::new(1, 1))
    }

    fn sample_result() -> SolveResult {
        SolveResult {
            path: vec![Cell::new(1, 1)],
            visited_order: vec![Cell::new(1, 1)],
            visited_count: 1,
            elapsed: Duration::from_micros(1500),
        }
    }

    #[test]
    fn test_plain_state_omits_solve_fields() {
        let json = serde_json::to_value(MazeSnapshot::of_state(&tiny_state())).unwrap();
        assert_eq!(json["rows"], 3);
        assert_eq!(json["cols"], 3);
        assert_eq!(json["maze"], serde_json::json!([[1, 1, 1], [1, 0, 1], [1, 1, 1]]));
        assert_eq!(json["start"], serde_json::json!({"x": 1, "y": 1}));
        assert_eq!(json["goal"], serde_json::json!({"x": 1, "y": 1}));
        for field in ["path", "visitedNodes", "timeMs", "pathLength", "visitedOrder"] {
            assert!(json.get(field).is_none(), "{} should be absent", field);
        }
    }

    #[test]
    fn test_solve_fields_use_wire_names() {
        let state = tiny_state();
        let json =
            serde_json::to_value(MazeSnapshot::with_result(&state, &sample_result())).unwrap();
        assert_eq!(json["visitedNodes"], 1);
        assert_eq!(json["pathLength"], 1);
        assert_eq!(json["timeMs"], 1.5);
        assert_eq!(json["path"], serde_json::json!([{"x": 1, "y": 1}]));
        assert_eq!(json["visitedOrder"], serde_json::json!([{"x": 1, "y": 1}]));
    }

    #[test]
    fn test_empty_path_is_omitted_but_counts_remain() {
        let state = tiny_state();
        let unreachable = SolveResult {
            path: vec![],
            visited_order: vec![Cell::new(1, 1)],
            visited_count: 1,
            elapsed: Duration::ZERO,
        };
        let json =
            serde_json::to_value(MazeSnapshot::with_result(&state, &unreachable)).unwrap();
        assert!(json.get("path").is_none());
        assert_eq!(json["pathLength"], 0);
        assert_eq!(json["visitedNodes"], 1);
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let state = tiny_state();
        for snapshot in [
            MazeSnapshot::of_state(&state),
            MazeSnapshot::with_result(&state, &sample_result()),
        ] {
            let encoded = serde_json::to_string(&snapshot).unwrap();
            let decoded: MazeSnapshot = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, snapshot);
        }
    }
}
