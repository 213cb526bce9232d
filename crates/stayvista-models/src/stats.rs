//! Dashboard aggregates.
//!
//! The sales chart is rendered as a header row followed by one row per
//! booking: `[["Day","Sales"], ["9/3", 240.5], ...]`. Day and month are taken
//! in UTC so the same booking lands on the same label on every server.

use chrono::{DateTime, Datelike, Utc};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use stayvista_core::serde::deserialize_lenient_f64;
use utoipa::ToSchema;

/// The `date`/`price` projection of a booking used by every statistic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingSummary {
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub sales: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData(pub Vec<ChartPoint>);

impl Serialize for ChartData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len() + 1))?;
        seq.serialize_element(&("Day", "Sales"))?;
        for point in &self.0 {
            seq.serialize_element(&(&point.label, point.sales))?;
        }
        seq.end()
    }
}

/// One chart row per booking, in booking order, labelled `day/month` (UTC).
pub fn build_chart(bookings: &[BookingSummary]) -> ChartData {
    ChartData(
        bookings
            .iter()
            .map(|booking| ChartPoint {
                label: format!("{}/{}", booking.date.day(), booking.date.month()),
                sales: booking.price,
            })
            .collect(),
    )
}

pub fn total_price(bookings: &[BookingSummary]) -> f64 {
    bookings.iter().map(|booking| booking.price).sum()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_rooms: u64,
    pub total_bookings: u64,
    pub total_price: f64,
    #[schema(value_type = Vec<Object>)]
    pub chart_data: ChartData,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostStats {
    pub total_rooms: u64,
    pub total_bookings: u64,
    pub total_price: f64,
    #[schema(value_type = Vec<Object>)]
    pub chart_data: ChartData,
    /// Registration timestamp (epoch millis) of the host's user record.
    pub host_since: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestStats {
    pub total_bookings: u64,
    pub total_price: f64,
    #[schema(value_type = Vec<Object>)]
    pub chart_data: ChartData,
    pub guest_since: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(date: &str, price: f64) -> BookingSummary {
        BookingSummary {
            date: date.parse().unwrap(),
            price,
        }
    }

    #[test]
    fn test_chart_has_header_and_utc_labels() {
        let bookings = vec![
            summary("2025-03-09T22:30:00Z", 240.5),
            // 23:30 at -05:00 is already the 10th in UTC
            summary("2025-03-09T23:30:00-05:00", 100.0),
        ];

        let chart = serde_json::to_value(build_chart(&bookings)).unwrap();
        assert_eq!(
            chart,
            json!([["Day", "Sales"], ["9/3", 240.5], ["10/3", 100.0]])
        );
    }

    #[test]
    fn test_empty_chart_is_header_only() {
        let chart = serde_json::to_value(build_chart(&[])).unwrap();
        assert_eq!(chart, json!([["Day", "Sales"]]));
    }

    #[test]
    fn test_total_price() {
        let bookings = vec![
            summary("2025-01-01T00:00:00Z", 10.25),
            summary("2025-01-02T00:00:00Z", 20.0),
        ];
        assert_eq!(total_price(&bookings), 30.25);
        assert_eq!(total_price(&[]), 0.0);
    }

    #[test]
    fn test_summary_accepts_text_price() {
        let summary: BookingSummary = serde_json::from_value(json!({
            "_id": "b1",
            "date": "2025-01-01T00:00:00Z",
            "price": "75"
        }))
        .unwrap();
        assert_eq!(summary.price, 75.0);
    }

    #[test]
    fn test_stats_wire_names() {
        let stats = GuestStats {
            total_bookings: 0,
            total_price: 0.0,
            chart_data: ChartData::default(),
            guest_since: Some(1),
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalBookings"], 0);
        assert_eq!(json["guestSince"], 1);
        assert_eq!(json["chartData"], json!([["Day", "Sales"]]));
    }
}
