mod rooms;

pub use rooms::room_routes;
