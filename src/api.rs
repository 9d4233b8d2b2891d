pub mod client;
pub mod heartbeat;
pub mod open_weather;
pub mod palmetto;
