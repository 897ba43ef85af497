//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod address;
pub mod barber_service;
pub mod booking;
pub mod branch;
pub mod favorite;
pub mod notification;
pub mod password;
pub mod review;
pub mod user;

pub use address::{Address, AddressResponse};
pub use barber_service::{BarberService, BarberServiceResponse};
pub use booking::{Booking, BookingAction, BookingItem, BookingResponse, BookingStatus};
pub use branch::{Branch, BranchResponse};
pub use favorite::{Favorite, FavoriteResponse};
pub use notification::{Notification, NotificationResponse};
pub use password::Password;
pub use review::{Review, ReviewResponse};
pub use user::{User, UserResponse, UserRole};
