use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Locked,
    Booked,
}

// Invariant: locked_by and lock_expiry are Some iff status is Locked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: u32,
    pub status: SeatStatus,
    pub locked_by: Option<String>,
    pub lock_expiry: Option<i64>,
}

impl Seat {
    pub fn available(id: u32) -> Self {
        Seat {
            id,
            status: SeatStatus::Available,
            locked_by: None,
            lock_expiry: None,
        }
    }
}
