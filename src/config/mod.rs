use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub reservation: ReservationConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Seat pool size and lock timing
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationConfig {
    pub total_seats: u32,
    pub lock_duration_ms: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_reservation=debug,tower_http=debug".to_string()),
            },
            reservation: ReservationConfig {
                total_seats: env::var("TOTAL_SEATS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("TOTAL_SEATS must be a valid number"),
                lock_duration_ms: env::var("LOCK_DURATION_MS")
                    .unwrap_or_else(|_| "60000".to_string())
                    .parse()
                    .expect("LOCK_DURATION_MS must be a valid number"),
            },
        }
    }
}
