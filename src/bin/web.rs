//! Single binary web server: JSON API for lobbies and the stateless balance engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, LOBBY_IDLE_HOURS (idle lobbies are removed after this long).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use team_balance_web::{
    auto_balance, best_split, shuffle_teams, BalanceReport, Lobby, LobbyError, LobbyId, Player,
    PlayerId, Position, Slot, TeamStats,
};

/// Per-lobby entry: lobby data + last activity time (for auto-cleanup).
struct LobbyEntry {
    lobby: Lobby,
    last_activity: Instant,
}

/// In-memory state: many lobbies by ID.
type AppState = Data<RwLock<HashMap<LobbyId, LobbyEntry>>>;

/// How often the cleanup task scans for idle lobbies.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct BalanceBody {
    players: Vec<Player>,
}

#[derive(Deserialize)]
struct SlotBody {
    slot: Slot,
    /// Insert position within the target list; appended when absent or past the end.
    #[serde(default)]
    index: Option<usize>,
}

#[derive(Deserialize)]
struct PositionBody {
    #[serde(default)]
    position: Option<Position>,
}

#[derive(Serialize)]
struct LobbyReport {
    report: BalanceReport,
    red_stats: Option<TeamStats>,
    blue_stats: Option<TeamStats>,
}

/// Path segment: lobby id (e.g. /api/lobbies/{id})
#[derive(Deserialize)]
struct LobbyPath {
    id: LobbyId,
}

/// Path segments: lobby id and player id (e.g. /api/lobbies/{id}/players/{player_id})
#[derive(Deserialize)]
struct LobbyPlayerPath {
    id: LobbyId,
    player_id: PlayerId,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

/// Look up a lobby, refresh its activity time, and run `f` on it.
/// Ok results return the updated lobby; errors become 400.
fn with_lobby<F>(state: &AppState, id: LobbyId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Lobby) -> Result<(), LobbyError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No lobby")),
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.lobby) {
        Ok(()) => HttpResponse::Ok().json(&entry.lobby),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-balance-web",
    })
}

/// Stateless engine call: exactly ten players in, best 5/5 split out.
#[post("/api/balance")]
async fn api_balance(body: Json<BalanceBody>) -> HttpResponse {
    match best_split(&body.players) {
        Ok(split) => HttpResponse::Ok().json(split),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}

/// Create a new lobby (returns it with id; client stores id for subsequent requests).
#[post("/api/lobbies")]
async fn api_create_lobby(state: AppState) -> HttpResponse {
    let lobby = Lobby::new();
    let id = lobby.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created lobby {}", id);
    let response = HttpResponse::Ok().json(&lobby);
    g.insert(
        id,
        LobbyEntry {
            lobby,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a lobby by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/lobbies/{id}")]
async fn api_get_lobby(state: AppState, path: Path<LobbyPath>) -> HttpResponse {
    with_lobby(&state, path.id, |_| Ok(()))
}

/// Balance report plus per-team stats for the current red/blue lists.
#[get("/api/lobbies/{id}/report")]
async fn api_lobby_report(state: AppState, path: Path<LobbyPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            let lobby = &entry.lobby;
            HttpResponse::Ok().json(LobbyReport {
                report: lobby.report(),
                red_stats: TeamStats::from_players(&lobby.red),
                blue_stats: TeamStats::from_players(&lobby.blue),
            })
        }
        None => HttpResponse::NotFound().json(error_json("No lobby")),
    }
}

/// Add a player (already resolved by the rank lookup) to the unassigned pool.
#[post("/api/lobbies/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<LobbyPath>,
    body: Json<Player>,
) -> HttpResponse {
    let player = body.into_inner();
    with_lobby(&state, path.id, move |lobby| lobby.add_player(player))
}

/// Remove a player by id.
#[delete("/api/lobbies/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<LobbyPlayerPath>) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| {
        lobby.remove_player(&path.player_id).map(|_| ())
    })
}

/// Move a player to red, blue, or back to unassigned; an `index` inserts (or reorders) there.
#[put("/api/lobbies/{id}/players/{player_id}/slot")]
async fn api_move_player(
    state: AppState,
    path: Path<LobbyPlayerPath>,
    body: Json<SlotBody>,
) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| {
        lobby.move_player_to(&path.player_id, body.slot, body.index)
    })
}

/// Set or clear a player's position.
#[put("/api/lobbies/{id}/players/{player_id}/position")]
async fn api_set_position(
    state: AppState,
    path: Path<LobbyPlayerPath>,
    body: Json<PositionBody>,
) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| {
        lobby.set_position(&path.player_id, body.position)
    })
}

/// Auto-balance all ten lobby players.
#[post("/api/lobbies/{id}/balance")]
async fn api_balance_lobby(state: AppState, path: Path<LobbyPath>) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| auto_balance(lobby).map(|_| ()))
}

/// Randomly deal all ten lobby players into red and blue.
#[post("/api/lobbies/{id}/shuffle")]
async fn api_shuffle_lobby(state: AppState, path: Path<LobbyPath>) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| {
        shuffle_teams(lobby, &mut rand::thread_rng())
    })
}

/// Move everyone back to unassigned.
#[post("/api/lobbies/{id}/reset")]
async fn api_reset_lobby(state: AppState, path: Path<LobbyPath>) -> HttpResponse {
    with_lobby(&state, path.id, |lobby| {
        lobby.reset();
        Ok(())
    })
}

/// All API routes.
fn routes(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_balance)
        .service(api_create_lobby)
        .service(api_get_lobby)
        .service(api_lobby_report)
        .service(api_add_player)
        .service(api_remove_player)
        .service(api_move_player)
        .service(api_set_position)
        .service(api_balance_lobby)
        .service(api_shuffle_lobby)
        .service(api_reset_lobby);
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_idle_hours() -> u64 {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let idle_hours: u64 = std::env::var("LOBBY_IDLE_HOURS")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(default_idle_hours);
    let idle_timeout = Duration::from_secs(idle_hours.saturating_mul(3600));
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<LobbyId, LobbyEntry>::new()));

    // Background task: periodically remove lobbies idle for longer than idle_timeout
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < idle_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} idle lobby(ies) (no activity for {}h)",
                    removed,
                    idle_hours
                );
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
    .bind(bind)?
    .run()
    .await
}
