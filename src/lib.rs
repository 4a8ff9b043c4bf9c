pub mod astar;
pub mod bfs;
pub mod cell;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod network;
pub mod snapshot;
pub mod solver;
pub mod store;

pub use cell::Cell;
pub use error::MazeError;
pub use grid::MazeState;
pub use snapshot::MazeSnapshot;
pub use solver::{Algorithm, SolveResult, Solver};
pub use store::MazeStore;
