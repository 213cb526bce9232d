use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use stayvista_auth::{UserRole, UserStatus};
use stayvista_core::ErrorResponse;
use stayvista_db::{DeleteResult, InsertOneResult, UpdateResult};
use stayvista_models::{
    AdminStats, Booking, CreateBookingDto, CreateReviewDto, CreateRoomDto, GuestStats, HostStats,
    PaymentIntentRequest, PaymentIntentResponse, PersonInfo, Review, Room, RoomStatusDto,
    SaveUserDto, SuccessResponse, TokenRequest, UpdateRoleDto, UpdateRoomDto, User,
};

use crate::modules::users::service::SaveUserOutcome;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_credential,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::save_user,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::update_role,
        crate::modules::rooms::controller::get_rooms,
        crate::modules::rooms::controller::get_room,
        crate::modules::rooms::controller::create_room,
        crate::modules::rooms::controller::update_room,
        crate::modules::rooms::controller::update_room_status,
        crate::modules::rooms::controller::delete_room,
        crate::modules::rooms::controller::get_my_listings,
        crate::modules::bookings::controller::create_booking,
        crate::modules::bookings::controller::get_my_bookings,
        crate::modules::bookings::controller::get_manage_bookings,
        crate::modules::bookings::controller::cancel_booking,
        crate::modules::reviews::controller::create_review,
        crate::modules::reviews::controller::get_room_reviews,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::stats::controller::get_admin_stats,
        crate::modules::stats::controller::get_host_stats,
        crate::modules::stats::controller::get_guest_stats,
    ),
    components(
        schemas(
            TokenRequest,
            SuccessResponse,
            ErrorResponse,
            User,
            UserRole,
            UserStatus,
            SaveUserDto,
            SaveUserOutcome,
            UpdateRoleDto,
            PersonInfo,
            Room,
            CreateRoomDto,
            UpdateRoomDto,
            RoomStatusDto,
            Booking,
            CreateBookingDto,
            Review,
            CreateReviewDto,
            PaymentIntentRequest,
            PaymentIntentResponse,
            AdminStats,
            HostStats,
            GuestStats,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Credential issuance and logout"),
        (name = "Users", description = "User records and role management"),
        (name = "Rooms", description = "Room listings"),
        (name = "Bookings", description = "Guest bookings"),
        (name = "Reviews", description = "Room reviews"),
        (name = "Payments", description = "Payment intents"),
        (name = "Statistics", description = "Dashboard statistics")
    ),
    info(
        title = "StayVista API",
        version = "0.1.0",
        description = "Room booking backend with cookie-carried JWT credentials and role-gated routes.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            )
        }
    }
}
