//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    address_handler, auth_handler, barber_service_handler, booking_handler, branch_handler,
    favorite_handler, notification_handler, review_handler,
};
use crate::domain::{
    AddressResponse, BarberServiceResponse, BookingAction, BookingResponse, BookingStatus,
    BranchResponse, FavoriteResponse, NotificationResponse, ReviewResponse, UserResponse, UserRole,
};
use crate::services::AuthResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the BarberQueue API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BarberQueue API",
        version = "0.1.0",
        description = "Barbershop booking backend: auth, branches, services, bookings, reviews, favorites and notifications",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register_client,
        auth_handler::login,
        auth_handler::logout,
        // Catalog endpoints
        barber_service_handler::list_services,
        barber_service_handler::get_service,
        barber_service_handler::create_service,
        barber_service_handler::update_service,
        barber_service_handler::delete_service,
        // Branch endpoints
        branch_handler::list_branches,
        branch_handler::get_branch,
        branch_handler::create_branch,
        branch_handler::update_branch,
        branch_handler::delete_branch,
        // Booking endpoints
        booking_handler::create_booking,
        booking_handler::get_booking,
        booking_handler::booking_history,
        booking_handler::change_status,
        booking_handler::attach_services,
        // Address endpoints
        address_handler::list_addresses,
        address_handler::create_address,
        address_handler::update_address,
        address_handler::delete_address,
        // Review endpoints
        review_handler::create_review,
        review_handler::list_branch_reviews,
        review_handler::delete_review,
        // Favorite endpoints
        favorite_handler::list_favorites,
        favorite_handler::add_favorite,
        favorite_handler::remove_favorite,
        // Notification endpoints
        notification_handler::list_notifications,
        notification_handler::mark_read,
        notification_handler::mark_all_read,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            BookingStatus,
            BookingAction,
            BookingResponse,
            BarberServiceResponse,
            BranchResponse,
            AddressResponse,
            ReviewResponse,
            FavoriteResponse,
            NotificationResponse,
            // Auth types
            auth_handler::RegisterClientRequest,
            auth_handler::AddressInput,
            auth_handler::LoginRequest,
            AuthResponse,
            // Booking types
            booking_handler::CreateBookingRequest,
            booking_handler::AttachServicesRequest,
            booking_handler::AttachServicesResponse,
            // Catalog types
            barber_service_handler::CreateBarberServiceRequest,
            barber_service_handler::UpdateBarberServiceRequest,
            // Branch types
            branch_handler::CreateBranchRequest,
            branch_handler::UpdateBranchRequest,
            // Address types
            address_handler::CreateAddressRequest,
            address_handler::UpdateAddressRequest,
            // Review types
            review_handler::CreateReviewRequest,
            // Favorite types
            favorite_handler::CreateFavoriteRequest,
            // Notification types
            notification_handler::MarkAllReadResponse,
            // Shared types
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, logout"),
        (name = "Catalog", description = "Barber service catalog"),
        (name = "Branches", description = "Shop locations"),
        (name = "Bookings", description = "Appointments, status actions, purchased services"),
        (name = "Addresses", description = "Saved client addresses"),
        (name = "Reviews", description = "Branch reviews"),
        (name = "Favorites", description = "Bookmarked branches"),
        (name = "Notifications", description = "In-app notifications")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
