use crate::api::handlers::rooms;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/rooms/:id",
            get(rooms::get_room)
                .head(rooms::room_exists)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
}
