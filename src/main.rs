use std::io;
use std::net::TcpListener;

use log::warn;

use rusty_maze::config::{MazeConfig, ServerConfig};
use rusty_maze::network;
use rusty_maze::store::MazeStore;

fn main() -> io::Result<()> {
    env_logger::init();

    let maze_config = MazeConfig::from_env().map_err(bad_config)?;
    let server_config = ServerConfig::from_env();

    // une seule source d'aléa, graînée par l'OS au démarrage
    let mut rng = rand::rng();
    let store = MazeStore::new(maze_config, &mut rng).map_err(bad_config)?;

    let listener = TcpListener::bind(&server_config.addr)?;
    println!("  Escape The Grid");
    println!("  Open: http://{}/", server_config.addr);

    // accepte et traite les connexions une par une
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(e) =
                    network::handle_client(stream, &store, &server_config.webroot, &mut rng)
                {
                    warn!("client error: {}", e);
                }
            }
            Err(e) => warn!("accept failed: {}", e),
        }
    }

    Ok(())
}

fn bad_config(e: rusty_maze::MazeError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
}
