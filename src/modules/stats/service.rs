use std::sync::Arc;

use stayvista_core::AppError;
use stayvista_db::{DocumentStore, Filter};
use stayvista_models::stats::{AdminStats, GuestStats, HostStats, build_chart, total_price};
use tracing::instrument;

use crate::modules::bookings::service::BookingService;
use crate::modules::rooms::service::RoomService;
use crate::modules::users::service::UserService;

pub struct StatsService;

impl StatsService {
    #[instrument(skip(store))]
    pub async fn admin_stats(store: &Arc<dyn DocumentStore>) -> Result<AdminStats, AppError> {
        let bookings = BookingService::summaries(store, &Filter::new()).await?;
        let total_users = UserService::count_users(store).await?;
        let total_rooms = RoomService::count_rooms(store, &Filter::new()).await?;

        Ok(AdminStats {
            total_users,
            total_rooms,
            total_bookings: bookings.len() as u64,
            total_price: total_price(&bookings),
            chart_data: build_chart(&bookings),
        })
    }

    #[instrument(skip(store))]
    pub async fn host_stats(
        store: &Arc<dyn DocumentStore>,
        host_email: &str,
    ) -> Result<HostStats, AppError> {
        let bookings = BookingService::summaries(store, &BookingService::by_host(host_email)).await?;
        let total_rooms =
            RoomService::count_rooms(store, &Filter::new().eq("host.email", host_email)).await?;
        let host_since = UserService::find_user(store, host_email)
            .await?
            .and_then(|user| user.timestamp);

        Ok(HostStats {
            total_rooms,
            total_bookings: bookings.len() as u64,
            total_price: total_price(&bookings),
            chart_data: build_chart(&bookings),
            host_since,
        })
    }

    #[instrument(skip(store))]
    pub async fn guest_stats(
        store: &Arc<dyn DocumentStore>,
        guest_email: &str,
    ) -> Result<GuestStats, AppError> {
        let bookings =
            BookingService::summaries(store, &BookingService::by_guest(guest_email)).await?;
        let guest_since = UserService::find_user(store, guest_email)
            .await?
            .and_then(|user| user.timestamp);

        Ok(GuestStats {
            total_bookings: bookings.len() as u64,
            total_price: total_price(&bookings),
            chart_data: build_chart(&bookings),
            guest_since,
        })
    }
}
