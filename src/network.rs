use std::fs;
use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::path::Path;

use log::{debug, warn};
use rand::Rng;

use crate::snapshot::MazeSnapshot;
use crate::solver::Algorithm;
use crate::store::MazeStore;

/// Les routes servies. Tout le reste est un 404; le coeur n'est alors
/// jamais invoqué.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Stylesheet,
    Script,
    Generate,
    Solve(Algorithm),
    CurrentState,
    NotFound,
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        if path == "/" || path.starts_with("/index") {
            return Route::Index;
        }
        if let Some(name) = path.strip_prefix("/api/solve/") {
            return match Algorithm::from_name(name) {
                Some(algorithm) => Route::Solve(algorithm),
                None => Route::NotFound,
            };
        }
        match path {
            "/styles.css" => Route::Stylesheet,
            "/script.js" => Route::Script,
            "/api/generate" => Route::Generate,
            "/api/maze" => Route::CurrentState,
            _ => Route::NotFound,
        }
    }
}

/// Traite une connexion : une requête, une réponse, puis fermeture.
pub fn handle_client<R: Rng + ?Sized>(
    mut stream: TcpStream,
    store: &MazeStore,
    webroot: &Path,
    rng: &mut R,
) -> io::Result<()> {
    let mut buffer = [0u8; 8192];
    let read = stream.read(&mut buffer)?;
    if read == 0 {
        return Ok(());
    }
    let request = String::from_utf8_lossy(&buffer[..read]);

    let path = match parse_request_path(&request) {
        Some(path) => path,
        None => {
            warn!("unparseable request line");
            return send_not_found(&mut stream);
        }
    };
    debug!("GET {}", path);

    match Route::resolve(&path) {
        Route::Index => {
            let html = load_asset(webroot, "index.html")
                .unwrap_or_else(|| "<h1>index.html missing</h1>".to_string());
            send_response(&mut stream, "text/html", &html)
        }
        Route::Stylesheet => {
            let css = load_asset(webroot, "styles.css").unwrap_or_default();
            send_response(&mut stream, "text/css", &css)
        }
        Route::Script => {
            let js = load_asset(webroot, "script.js").unwrap_or_default();
            send_response(&mut stream, "application/javascript", &js)
        }
        Route::Generate => match store.regenerate(rng) {
            Ok(snapshot) => send_json(&mut stream, &snapshot),
            Err(e) => {
                // impossible une fois le labyrinthe initial généré avec
                // la même configuration, mais on ne panique pas pour ça
                warn!("generation failed: {}", e);
                send_not_found(&mut stream)
            }
        },
        Route::Solve(algorithm) => send_json(&mut stream, &store.solve(algorithm)),
        Route::CurrentState => send_json(&mut stream, &store.snapshot()),
        Route::NotFound => send_not_found(&mut stream),
    }
}

/// Extrait le chemin de la ligne de requête. Seul GET est servi.
fn parse_request_path(request: &str) -> Option<String> {
    let mut parts = request.lines().next()?.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;
    if method != "GET" {
        return None;
    }
    Some(path.to_string())
}

fn load_asset(webroot: &Path, name: &str) -> Option<String> {
    fs::read_to_string(webroot.join(name)).ok()
}

fn send_json(stream: &mut TcpStream, snapshot: &MazeSnapshot) -> io::Result<()> {
    let body = serde_json::to_string(snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    send_response(stream, "application/json", &body)
}

/// Réponse 200 avec les en-têtes anti-cache : le labyrinthe est un état
/// mutable, un cache côté client désynchroniserait grille et chemin.
fn send_response(stream: &mut TcpStream, content_type: &str, body: &str) -> io::Result<()> {
    write_response(stream, "200 OK", content_type, body)
}

fn send_not_found(stream: &mut TcpStream) -> io::Result<()> {
    write_response(stream, "404 Not Found", "text/html", "<h1>404 Not Found</h1>")
}

fn write_response(
    stream: &mut TcpStream,
    status: &str,
    content_type: &str,
    body: &str,
) -> io::Result<()> {
    let header = format!(
        "HTTP/1.1 {}\r\n\
         Content-Type: {}\r\n\
         Content-Length: {}\r\n\
         Cache-Control: no-store, no-cache, must-revalidate, max-age=0\r\n\
         Pragma: no-cache\r\n\
         Expires: 0\r\n\
         Connection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    stream.write_all(header.as_bytes())?;
    stream.write_all(body.as_bytes())?;
    stream.flush()
}
