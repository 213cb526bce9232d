pub mod controller;
pub mod gateway;
pub mod router;
pub mod service;
