use std::sync::Arc;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use stayvista_auth::UserRole;
use stayvista_cli::admin::{create_admin, set_role};
use stayvista_cli::seeder::{self, SeedConfig};
use stayvista_db::DocumentStore;

#[derive(Parser)]
#[command(name = "stayvista-cli")]
#[command(about = "StayVista CLI - Administrative tools for StayVista", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account, or promote an existing user to admin
    CreateAdmin {
        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Display name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Set the role of an existing user
    SetRole {
        /// Email address of the user
        #[arg(short = 'e', long)]
        email: String,

        /// One of guest, host, admin
        #[arg(short = 'r', long)]
        role: UserRole,
    },
    /// Seed the database with fake rooms owned by one host
    SeedRooms {
        /// Number of rooms to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,

        /// Host that owns the seeded rooms
        #[arg(long, default_value = "host@stayvista.dev")]
        host_email: String,

        /// Host display name stored on each room
        #[arg(long)]
        host_name: Option<String>,
    },
    /// Remove every seeded room (real listings are kept)
    ClearRooms,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    let store = match stayvista_db::connect(&database_url).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateAdmin { email, name } => handle_create_admin(&store, email, name).await,
        Commands::SetRole { email, role } => handle_set_role(&store, email, role).await,
        Commands::SeedRooms {
            count,
            host_email,
            host_name,
        } => handle_seed_rooms(&store, count, host_email, host_name).await,
        Commands::ClearRooms => handle_clear_rooms(&store).await,
    }
}

fn prompt(label: &str) -> String {
    match Input::<String>::new().with_prompt(label).interact_text() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", label.to_lowercase(), e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_admin(
    store: &Arc<dyn DocumentStore>,
    email: Option<String>,
    name: Option<String>,
) {
    let email = email.unwrap_or_else(|| prompt("Email address"));
    let name = name.unwrap_or_else(|| prompt("Name"));

    match create_admin(store, &email, Some(&name)).await {
        Ok(result) => {
            if result.upserted_id.is_some() {
                println!("\n✅ Admin created successfully!");
            } else {
                println!("\n✅ Existing user promoted to admin!");
            }
            println!("   Email: {}", email);
            println!("   Name: {}", name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_set_role(store: &Arc<dyn DocumentStore>, email: String, role: UserRole) {
    match set_role(store, &email, role).await {
        Ok(_) => {
            println!("✅ {} is now {}", email, role);
        }
        Err(e) => {
            eprintln!("\n❌ Error setting role: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_rooms(
    store: &Arc<dyn DocumentStore>,
    count: usize,
    host_email: String,
    host_name: Option<String>,
) {
    let mut config = SeedConfig::new(count, host_email);
    if let Some(name) = host_name {
        config = config.with_host_name(name);
    }

    match seeder::seed_rooms(store, &config).await {
        Ok(ids) => {
            println!("✅ Created {} rooms", ids.len());
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding rooms: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_rooms(store: &Arc<dyn DocumentStore>) {
    match seeder::clear_seeded_rooms(store).await {
        Ok(deleted) => {
            println!("✅ Cleared {} seeded rooms", deleted);
        }
        Err(e) => {
            eprintln!("\n❌ Error clearing rooms: {:#}", e);
            std::process::exit(1);
        }
    }
}
