//! HTTP request handlers.

pub mod address_handler;
pub mod auth_handler;
pub mod barber_service_handler;
pub mod booking_handler;
pub mod branch_handler;
pub mod favorite_handler;
pub mod notification_handler;
pub mod review_handler;

pub use address_handler::address_routes;
pub use auth_handler::{auth_routes, logout_routes};
pub use barber_service_handler::barber_service_routes;
pub use booking_handler::{booking_routes, booking_service_routes};
pub use branch_handler::branch_routes;
pub use favorite_handler::favorite_routes;
pub use notification_handler::notification_routes;
pub use review_handler::review_routes;
