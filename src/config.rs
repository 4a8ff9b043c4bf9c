use std::env;
use std::path::PathBuf;

use crate::error::MazeError;

/// Dimensions de référence du labyrinthe.
pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 38;

/// Probabilité d'ouvrir un mur candidat pendant la passe de tressage.
pub const DEFAULT_BRAID_PROBABILITY: f64 = 0.18;

pub const DEFAULT_ADDR: &str = "localhost:8081";
pub const DEFAULT_WEBROOT: &str = "web";

/// Paramètres du générateur de labyrinthe.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub braid_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            braid_probability: DEFAULT_BRAID_PROBABILITY,
        }
    }
}

impl MazeConfig {
    /// Lit la configuration depuis l'environnement
    /// (`MAZE_ROWS`, `MAZE_COLS`), valeurs de référence sinon.
    pub fn from_env() -> Result<Self, MazeError> {
        Ok(Self {
            rows: parse_var("MAZE_ROWS", DEFAULT_ROWS)?,
            cols: parse_var("MAZE_COLS", DEFAULT_COLS)?,
            braid_probability: DEFAULT_BRAID_PROBABILITY,
        })
    }
}

/// Paramètres du serveur : adresse d'écoute et racine des fichiers statiques.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: String,
    pub webroot: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            webroot: PathBuf::from(DEFAULT_WEBROOT),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("MAZE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            webroot: PathBuf::from(
                env::var("MAZE_WEBROOT").unwrap_or_else(|_| DEFAULT_WEBROOT.to_string()),
            ),
        }
    }
}

fn parse_var(name: &'static str, default: usize) -> Result<usize, MazeError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| MazeError::BadConfig {
            name,
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_configuration() {
        // un seul test touche aux variables d'environnement pour éviter
        // les courses entre tests parallèles
        env::remove_var("MAZE_ROWS");
        env::remove_var("MAZE_COLS");
        let config = MazeConfig::from_env().unwrap();
        assert_eq!(config, MazeConfig::default());
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, DEFAULT_COLS);

        env::set_var("MAZE_ROWS", "11");
        env::set_var("MAZE_COLS", "17");
        let config = MazeConfig::from_env().unwrap();
        assert_eq!(config.rows, 11);
        assert_eq!(config.cols, 17);

        env::set_var("MAZE_ROWS", "not-a-number");
        let err = MazeConfig::from_env().unwrap_err();
        assert_eq!(
            err,
            MazeError::BadConfig {
                name: "MAZE_ROWS",
                value: "not-a-number".to_string()
            }
        );

        env::remove_var("MAZE_ROWS");
        env::remove_var("MAZE_COLS");
    }
}
