use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Cell;
use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::grid::{Grid, MazeState, DX, DY};

/// Génère un labyrinthe : creusage par backtracking sur une grille
/// virtuelle demi-résolution, puis tressage de quelques murs pour
/// créer des boucles.
///
/// Le départ est fixé en (1,1) et l'arrivée en (rows-2, cols-2); le
/// creusage garantit qu'un chemin existe entre les deux.
pub fn generate<R: Rng + ?Sized>(
    config: &MazeConfig,
    rng: &mut R,
) -> Result<MazeState, MazeError> {
    if config.rows < 3 || config.cols < 3 {
        return Err(MazeError::GridTooSmall {
            rows: config.rows,
            cols: config.cols,
        });
    }

    let mut grid = Grid::filled(config.rows, config.cols);
    let start = Cell::new(1, 1);
    let goal = Cell::new(config.rows - 2, config.cols - 2);

    carve(&mut grid, start, rng);

    // le creusage par pas de deux peut rater l'arrivée selon la parité
    // des dimensions : on force les deux extrémités ouvertes
    grid.open(start.x, start.y);
    grid.open(goal.x, goal.y);

    braid(&mut grid, config.braid_probability, rng);

    Ok(MazeState::new(grid, start, goal))
}

/// Creusage en profondeur avec pile explicite : depuis la case courante,
/// on saute de deux cases dans une direction tirée au hasard et on ouvre
/// la case intermédiaire, ce qui laisse un mur entre chaque passage.
fn carve<R: Rng + ?Sized>(grid: &mut Grid, from: Cell, rng: &mut R) {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;

    let mut stack = vec![from];
    grid.open(from.x, from.y);

    while let Some(&current) = stack.last() {
        let mut dirs = [0usize, 1, 2, 3];
        dirs.shuffle(rng);

        let mut advanced = false;
        for &d in dirs.iter() {
            let nx = current.x as isize + DX[d] * 2;
            let ny = current.y as isize + DY[d] * 2;
            // on reste strictement à l'intérieur de la bordure
            if nx <= 0 || nx >= rows - 1 || ny <= 0 || ny >= cols - 1 {
                continue;
            }
            if !grid.is_wall(nx as usize, ny as usize) {
                continue;
            }
            let mx = (current.x as isize + DX[d]) as usize;
            let my = (current.y as isize + DY[d]) as usize;
            grid.open(mx, my);
            grid.open(nx as usize, ny as usize);
            stack.push(Cell::new(nx as usize, ny as usize));
            advanced = true;
            break;
        }

        if !advanced {
            stack.pop();
        }
    }
}

/// Passe de tressage : chaque mur intérieur qui sépare deux passages
/// alignés (horizontalement ou verticalement) est ouvert avec la
/// probabilité donnée. Les impasses deviennent des boucles et les deux
/// solveurs cessent d'explorer les mêmes régions.
fn braid<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) {
    for x in 1..grid.rows() - 1 {
        for y in 1..grid.cols() - 1 {
            if !grid.is_wall(x, y) {
                continue;
            }
            let horizontal = !grid.is_wall(x, y - 1) && !grid.is_wall(x, y + 1);
            let vertical = !grid.is_wall(x - 1, y) && !grid.is_wall(x + 1, y);
            if (horizontal || vertical) && rng.random::<f64>() < probability {
                grid.open(x, y);
            }
        }
    }
}
