use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::address::en::{CityName, CountryName};
use fake::faker::lorem::en::{Paragraph, Words};
use rayon::prelude::*;
use stayvista_db::{DocumentStore, Filter};
use stayvista_models::{CreateRoomDto, PersonInfo};

use super::models::{RoomSeed, SeedConfig};

pub const ROOMS: &str = "rooms";

const CATEGORIES: &[&str] = &[
    "Beach",
    "Windmills",
    "Modern",
    "Countryside",
    "Pools",
    "Islands",
    "Lake",
    "Skiing",
    "Castles",
    "Caves",
    "Camping",
    "Arctic",
    "Desert",
    "Barns",
    "Lux",
];

/// Generates room data in parallel using Rayon
pub fn generate_rooms(config: &SeedConfig) -> Vec<RoomSeed> {
    let today = Utc::now().date_naive();

    (0..config.count)
        .into_par_iter()
        .map(|idx| {
            let city: String = CityName().fake();
            let country: String = CountryName().fake();
            let words: Vec<String> = Words(2..4).fake();
            let description: String = Paragraph(2..4).fake();

            let starts_in = (1..60i64).fake::<i64>();
            let nights = (2..21i64).fake::<i64>();
            let from = today + Duration::days(starts_in);
            let to = from + Duration::days(nights);

            let bedrooms = (1..6u32).fake::<u32>();

            RoomSeed {
                room: CreateRoomDto {
                    title: format!("{} in {}", words.join(" "), city),
                    location: format!("{city}, {country}"),
                    category: CATEGORIES[idx % CATEGORIES.len()].to_string(),
                    price: f64::from((40..900u32).fake::<u32>()),
                    guests: Some(bedrooms * 2),
                    bedrooms: Some(bedrooms),
                    bathrooms: Some((1..bedrooms + 1).fake::<u32>()),
                    description: Some(description),
                    image: Some(format!("https://picsum.photos/seed/stayvista-{idx}/800/600")),
                    from: Some(from.to_string()),
                    to: Some(to.to_string()),
                    host: PersonInfo {
                        name: config.host_name.clone(),
                        email: config.host_email.clone(),
                        image: None,
                    },
                    booked: false,
                },
                seeded: true,
            }
        })
        .collect()
}

/// Seeds rooms into the document store
pub async fn seed_rooms(
    store: &Arc<dyn DocumentStore>,
    config: &SeedConfig,
) -> anyhow::Result<Vec<String>> {
    let start_time = Instant::now();
    println!("🏠 Seeding {} rooms for {}...", config.count, config.host_email);

    let rooms = generate_rooms(config);
    let mut ids = Vec::with_capacity(rooms.len());
    for room in &rooms {
        let document = serde_json::to_value(room)?;
        let result = store
            .insert_one(ROOMS, document)
            .await
            .context("failed to insert seeded room")?;
        ids.push(result.inserted_id);
    }

    println!(
        "   ✓ Inserted {} rooms in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Deletes every room created by [`seed_rooms`]
pub async fn clear_seeded_rooms(store: &Arc<dyn DocumentStore>) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded rooms...");

    let filter = Filter::new().eq("seeded", true);
    let mut deleted = 0;
    while store.delete_one(ROOMS, &filter).await?.deleted_count > 0 {
        deleted += 1;
    }

    println!(
        "   ✓ Deleted {} rooms in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
