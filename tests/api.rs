//! HTTP-level tests: admin gate, team persistence, draw/cup/league endpoints.

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{test, web::Data, App};
use football_cup_web::api::{
    configure, frontend, session_middleware, AppState, ADMIN_SESSION_HOURS, SESSION_COOKIE,
};
use football_cup_web::TeamStore;
use serde_json::{json, Value};

const PASSWORD: &str = "letmein";

fn state() -> Data<AppState> {
    let path = std::env::temp_dir()
        .join(format!("football-cup-web-{}", uuid::Uuid::new_v4()))
        .join("teams.json");
    Data::new(AppState::new(TeamStore::new(path), PASSWORD))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .wrap(session_middleware(Key::generate(), false))
                .configure(configure),
        )
        .await
    };
}

fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "password": PASSWORD }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        session_cookie(&resp).expect("login sets the session cookie")
    }};
}

macro_rules! is_admin {
    ($app:expr, $cookie:expr) => {{
        let mut req = test::TestRequest::get().uri("/api/auth");
        if let Some(c) = $cookie {
            req = req.cookie(c);
        }
        let body: Value = test::call_and_read_body_json(&$app, req.to_request()).await;
        body["isAdmin"].as_bool().unwrap()
    }};
}

fn three_teams() -> Value {
    json!({
        "Athletic": [{ "name": "Ada", "position": "Goalkeeper", "rating": 80 }],
        "Borough": [{ "name": "Ben", "position": "Defender" }],
        "County": []
    })
}

#[actix_web::test]
async fn anonymous_is_not_admin() {
    let state = state();
    let app = app!(state);
    assert!(!is_admin!(app, None::<Cookie<'static>>));
}

#[actix_web::test]
async fn correct_password_grants_admin() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp).unwrap();
    assert!(cookie.http_only().unwrap_or(false));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true, "message": "Logged in" }));

    assert!(is_admin!(app, Some(cookie)));
}

#[actix_web::test]
async fn login_cookie_lasts_four_hours() {
    let state = state();
    let app = app!(state);
    let cookie = login!(app);
    assert_eq!(cookie.max_age(), Some(CookieDuration::hours(ADMIN_SESSION_HOURS)));
    assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(14_400)));
}

#[actix_web::test]
async fn wrong_password_is_rejected() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let cookie = session_cookie(&resp);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": false, "message": "Invalid password" }));

    assert!(!is_admin!(app, cookie));
}

#[actix_web::test]
async fn logout_revokes_admin() {
    let state = state();
    let app = app!(state);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared = session_cookie(&resp).expect("logout clears the cookie");
    assert_eq!(cleared.value(), "");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));

    assert!(!is_admin!(app, Some(cleared)));
}

#[actix_web::test]
async fn copied_cookie_is_useless_after_logout() {
    let state = state();
    let app = app!(state);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Replay the cookie issued at login, not the cleared one.
    assert!(!is_admin!(app, Some(cookie.clone())));
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_routes_are_forbidden_without_login() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .set_json(three_teams())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Admin only" }));

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn teams_start_empty_and_round_trip() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({}));

    let cookie = login!(app);
    let req = test::TestRequest::post()
        .uri("/api/teams")
        .cookie(cookie)
        .set_json(three_teams())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Teams saved" }));

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["Athletic"][0]["rating"], 80);
    assert_eq!(body["Borough"][0]["rating"], 75);
    assert_eq!(body["Borough"][0]["position"], "Defender");
    assert_eq!(body["County"], json!([]));

    let req = test::TestRequest::get().uri("/api/teams.csv").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let csv = test::read_body(resp).await;
    assert!(std::str::from_utf8(&csv).unwrap().contains("Athletic,Ada,Goalkeeper,80"));
}

#[actix_web::test]
async fn out_of_range_rating_is_rejected() {
    let state = state();
    let app = app!(state);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .cookie(cookie)
        .set_json(json!({ "Athletic": [{ "name": "Ada", "rating": 120 }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn cup_and_league_need_a_draw() {
    let state = state();
    let app = app!(state);

    for uri in ["/cup", "/league"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "No matches generated yet" }));
    }

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn generate_then_simulate() {
    let state = state();
    let app = app!(state);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .cookie(cookie.clone())
        .set_json(three_teams())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .cookie(cookie)
        .to_request();
    let draw: Value = test::call_and_read_body_json(&app, req).await;
    let matches = draw["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches.iter().filter(|m| m["away"].is_null()).count(), 1);
    let id = draw["id"].as_str().unwrap().to_string();

    // Anonymous viewers see the latest draw.
    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(&body, &draw["matches"]);

    let req = test::TestRequest::get().uri("/cup").to_request();
    let cup: Value = test::call_and_read_body_json(&app, req).await;
    let rounds = cup["bracket"].as_array().unwrap();
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0]["name"], "SEMIFINAL");
    assert_eq!(rounds[1]["name"], "FINAL");
    assert_eq!(rounds[1]["matches"][0]["winner"], cup["winner"]);

    let req = test::TestRequest::get()
        .uri(&format!("/league?draw={id}"))
        .to_request();
    let table: Value = test::call_and_read_body_json(&app, req).await;
    let rows = table.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let points: Vec<u64> = rows.iter().map(|r| r["points"].as_u64().unwrap()).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));
}

#[actix_web::test]
async fn unknown_draw_id_is_not_found() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/cup?draw={}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn frontend_is_served_from_the_web_root() {
    let dir = std::env::temp_dir().join(format!("football-cup-web-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>cup</h1>").unwrap();
    std::fs::write(dir.join("app.js"), "loadTeams();").unwrap();

    let state = state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .wrap(session_middleware(Key::generate(), false))
            .configure(configure)
            .service(frontend(&dir)),
    )
    .await;

    for (uri, expected) in [
        ("/", "<h1>cup</h1>"),
        ("/app.js", "loadTeams();"),
        ("/teams/some-page", "<h1>cup</h1>"),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), expected, "{uri}");
    }

    // API routes still take precedence.
    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({}));
}
