//! Route handlers. API failures are returned through [`ApiError`].

use crate::api::auth::{self, Admin};
use crate::api::{ApiError, AppState};
use crate::logic::{build_cup_bracket, generate_matches, run_league, RandomOutcomes};
use crate::models::{team_names, validate_teams, Draw, DrawId, GameMatch, Teams, TournamentError};
use crate::store::teams_to_csv;
use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Json, Query, ServiceConfig},
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type State = Data<AppState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStatus {
    is_admin: bool,
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    password: String,
}

/// Optional `?draw=<id>` selecting a specific draw.
#[derive(Deserialize)]
struct DrawQuery {
    draw: Option<DrawId>,
}

/// Register every API route.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_get_teams)
        .service(api_save_teams)
        .service(api_teams_csv)
        .service(api_auth)
        .service(api_login)
        .service(api_logout)
        .service(api_generate)
        .service(api_matches)
        .service(cup)
        .service(league);
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-cup-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/teams")]
async fn api_get_teams(state: State) -> Result<HttpResponse, ApiError> {
    let teams = state.store.load().await.map_err(ApiError::ReadTeams)?;
    Ok(HttpResponse::Ok().json(teams))
}

/// Replace every roster at once (admin only).
#[post("/api/teams")]
async fn api_save_teams(_admin: Admin, state: State, body: Json<Teams>) -> Result<HttpResponse, ApiError> {
    let teams = body.into_inner();
    validate_teams(&teams)?;
    state.store.save(&teams).await.map_err(ApiError::SaveTeams)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Teams saved" })))
}

#[get("/api/teams.csv")]
async fn api_teams_csv(state: State) -> Result<HttpResponse, ApiError> {
    let teams = state.store.load().await.map_err(ApiError::ReadTeams)?;
    let csv = teams_to_csv(&teams).map_err(ApiError::ReadTeams)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(csv))
}

#[get("/api/auth")]
async fn api_auth(state: State, session: Session) -> HttpResponse {
    HttpResponse::Ok().json(AuthStatus {
        is_admin: auth::is_admin(&session, &state.grants),
    })
}

#[post("/api/login")]
async fn api_login(state: State, session: Session, body: Json<LoginBody>) -> Result<HttpResponse, ApiError> {
    if !state.check_password(&body.password) {
        log::warn!("Rejected admin login");
        return Err(ApiError::Unauthorized);
    }
    auth::grant_admin(&session, &state.grants)?;
    log::info!("Admin logged in");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true, "message": "Logged in" })))
}

#[post("/api/logout")]
async fn api_logout(state: State, session: Session) -> Result<HttpResponse, ApiError> {
    auth::revoke(&session, &state.grants)?;
    log::info!("Admin logged out");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

/// Draw a new first round from the current teams (admin only).
#[post("/api/generate")]
async fn api_generate(_admin: Admin, state: State, session: Session) -> Result<HttpResponse, ApiError> {
    let teams = state.store.load().await.map_err(ApiError::ReadTeams)?;
    let matches = generate_matches(team_names(&teams), &mut RandomOutcomes::new());
    let draw = state.draws.publish(Draw::new(matches))?;
    auth::remember_draw(&session, draw.id)?;
    log::info!("Generated draw {} with {} match(es)", draw.id, draw.matches.len());
    Ok(HttpResponse::Ok().json(&*draw))
}

#[get("/api/matches")]
async fn api_matches(state: State, session: Session, query: Query<DrawQuery>) -> Result<HttpResponse, ApiError> {
    let matches: Vec<GameMatch> = resolve_draw(&state, &session, query.draw)?
        .map(|d| d.matches.clone())
        .unwrap_or_default();
    Ok(HttpResponse::Ok().json(matches))
}

/// Knockout simulation over the resolved draw.
#[get("/cup")]
async fn cup(state: State, session: Session, query: Query<DrawQuery>) -> Result<HttpResponse, ApiError> {
    let draw = resolve_draw(&state, &session, query.draw)?.ok_or(TournamentError::NoMatches)?;
    let bracket = build_cup_bracket(&draw.matches, &mut RandomOutcomes::new())?;
    Ok(HttpResponse::Ok().json(bracket))
}

/// League simulation over the resolved draw.
#[get("/league")]
async fn league(state: State, session: Session, query: Query<DrawQuery>) -> Result<HttpResponse, ApiError> {
    let draw = resolve_draw(&state, &session, query.draw)?.ok_or(TournamentError::NoMatches)?;
    let table = run_league(&draw.matches, &mut RandomOutcomes::new())?;
    Ok(HttpResponse::Ok().json(table))
}

/// Pick the draw a request refers to: the explicit `?draw=` id, else the one
/// this session generated, else the latest published draw.
fn resolve_draw(state: &AppState, session: &Session, explicit: Option<DrawId>) -> Result<Option<Arc<Draw>>, ApiError> {
    if let Some(id) = explicit {
        return state.draws.get(id)?.map(Some).ok_or(ApiError::DrawNotFound(id));
    }
    if let Some(id) = auth::session_draw(session) {
        if let Some(draw) = state.draws.get(id)? {
            return Ok(Some(draw));
        }
    }
    Ok(state.draws.latest()?)
}
