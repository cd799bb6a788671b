use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, channel, command, quote, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/users", post(user::create))
        .route(
            "/api/users/{username}",
            get(user::get).delete(user::remove),
        )
        .route(
            "/api/channels/{channel}",
            get(channel::get)
                .post(channel::create)
                .patch(channel::update)
                .delete(channel::remove),
        )
        .route("/api/channels/{channel}/commands", get(command::list))
        .route(
            "/api/channels/{channel}/commands/{name}",
            get(command::get)
                .post(command::create)
                .patch(command::update)
                .delete(command::remove),
        )
        .route(
            "/api/channels/{channel}/quotes",
            get(quote::list).post(quote::create),
        )
        .route("/api/channels/{channel}/quotes/random", get(quote::random))
        .route(
            "/api/channels/{channel}/quotes/{id}",
            get(quote::get).patch(quote::update).delete(quote::remove),
        )
}
