use serde::Serialize;
use stayvista_models::CreateRoomDto;

/// A generated room plus the marker used to find it again.
#[derive(Debug, Serialize)]
pub struct RoomSeed {
    #[serde(flatten)]
    pub room: CreateRoomDto,
    pub seeded: bool,
}

/// How many rooms to create and whom they belong to.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub count: usize,
    pub host_email: String,
    pub host_name: Option<String>,
}

impl SeedConfig {
    pub fn new(count: usize, host_email: impl Into<String>) -> Self {
        Self {
            count,
            host_email: host_email.into(),
            host_name: None,
        }
    }

    pub fn with_host_name(mut self, name: impl Into<String>) -> Self {
        self.host_name = Some(name.into());
        self
    }
}
