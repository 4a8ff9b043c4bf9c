use std::sync::RwLock;

use log::{debug, info};
use rand::Rng;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generator;
use crate::grid::MazeState;
use crate::snapshot::MazeSnapshot;
use crate::solver::Algorithm;

/// Le détenteur du labyrinthe courant, injecté dans le transport.
///
/// Écrivain unique, lecteurs multiples : une régénération remplace
/// l'état sous le verrou d'écriture, une résolution garde le verrou de
/// lecture pendant toute sa durée et ne voit donc jamais une grille à
/// moitié remplacée. Les résolutions entre elles peuvent se chevaucher.
pub struct MazeStore {
    config: MazeConfig,
    state: RwLock<MazeState>,
}

impl MazeStore {
    /// Génère le labyrinthe initial. Échoue si les dimensions ne
    /// laissent aucun intérieur à creuser.
    pub fn new<R: Rng + ?Sized>(config: MazeConfig, rng: &mut R) -> Result<Self, MazeError> {
        let state = generator::generate(&config, rng)?;
        info!(
            "initial maze generated ({}x{})",
            config.rows, config.cols
        );
        Ok(Self {
            config,
            state: RwLock::new(state),
        })
    }

    /// Remplace le labyrinthe par un nouveau et renvoie son instantané.
    /// La construction se fait hors verrou; seul l'échange est exclusif.
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MazeSnapshot, MazeError> {
        let fresh = generator::generate(&self.config, rng)?;
        let mut state = self.state.write().unwrap();
        *state = fresh;
        info!("maze regenerated");
        Ok(MazeSnapshot::of_state(&state))
    }

    /// Instantané de l'état courant, sans résolution.
    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot::of_state(&self.state.read().unwrap())
    }

    /// Résout le labyrinthe courant avec l'algorithme demandé.
    pub fn solve(&self, algorithm: Algorithm) -> MazeSnapshot {
        let state = self.state.read().unwrap();
        let solver = algorithm.solver();
        let result = solver.solve(&state);
        debug!(
            "{} visited {} cells in {:?}, path length {}",
            solver.name(),
            result.visited_count,
            result.elapsed,
            result.path.len()
        );
        MazeSnapshot::with_result(&state, &result)
    }
}
