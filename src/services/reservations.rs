use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::models::{Seat, SeatStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("User is required")]
    UserRequired,
    #[error("Seat not found")]
    SeatNotFound,
    #[error("Seat already booked")]
    AlreadyBooked,
    #[error("Seat already locked by another user")]
    AlreadyLocked,
    #[error("Lock expired. Please lock the seat again.")]
    LockExpired,
    #[error("Seat not locked by you")]
    NotLockedByYou,
}

/// In-memory reservation manager for a fixed pool of seats.
///
/// Seats move through `available -> locked -> booked`. A lock is held for
/// `lock_duration_ms` and reclaimed lazily: there is no background sweeper,
/// expiry is checked when the next `lock` or `confirm` touches the seat.
///
/// Every check-then-set sequence runs under one table-wide mutex, so two
/// concurrent `lock` calls on the same seat can never both succeed.
pub struct ReservationManager {
    seats: Mutex<Vec<Seat>>,
    lock_duration_ms: i64,
    clock: Arc<dyn Clock>,
}

impl ReservationManager {
    pub fn new(total_seats: u32, lock_duration_ms: i64) -> Self {
        Self::with_clock(total_seats, lock_duration_ms, Arc::new(SystemClock))
    }

    pub fn with_clock(total_seats: u32, lock_duration_ms: i64, clock: Arc<dyn Clock>) -> Self {
        let seats = (1..=total_seats).map(Seat::available).collect();
        Self {
            seats: Mutex::new(seats),
            lock_duration_ms,
            clock,
        }
    }

    /// Snapshot of all seats, ordered by id.
    ///
    /// Read-only: no expiry reclaim happens here, so a lock whose expiry has
    /// passed keeps reporting `locked` until the next `lock` or `confirm`
    /// touches that seat.
    pub fn list(&self) -> Vec<Seat> {
        self.table().clone()
    }

    /// Lock an available seat for `user`.
    ///
    /// An expired lock on the seat is reclaimed first, so the seat is up for
    /// grabs again. An unexpired lock is exclusive even against its own
    /// holder: re-locking is rejected, not refreshed.
    pub fn lock(&self, seat_id: u32, user: &str) -> Result<Seat, ReservationError> {
        let user = valid_user(user)?;
        // One read of the clock per operation, reused for every comparison.
        let now = self.clock.now_millis();
        let mut seats = self.table();
        let seat = seat_mut(&mut seats, seat_id)?;

        if lock_expired(seat, now) {
            debug!("Lock on seat {} expired, reclaiming", seat_id);
            reclaim(seat);
        }

        match seat.status {
            SeatStatus::Booked => Err(ReservationError::AlreadyBooked),
            SeatStatus::Locked => Err(ReservationError::AlreadyLocked),
            SeatStatus::Available => {
                seat.status = SeatStatus::Locked;
                seat.locked_by = Some(user.to_string());
                seat.lock_expiry = Some(now + self.lock_duration_ms);
                info!("Seat {} locked by {}", seat_id, user);
                Ok(seat.clone())
            }
        }
    }

    /// Confirm a seat locked by `user`, booking it permanently.
    ///
    /// If the lock has expired the seat is reclaimed and the call fails, so
    /// the caller has to lock again. Booked seats are terminal.
    pub fn confirm(&self, seat_id: u32, user: &str) -> Result<Seat, ReservationError> {
        let user = valid_user(user)?;
        let now = self.clock.now_millis();
        let mut seats = self.table();
        let seat = seat_mut(&mut seats, seat_id)?;

        if lock_expired(seat, now) {
            info!("Lock on seat {} expired before confirmation", seat_id);
            reclaim(seat);
            return Err(ReservationError::LockExpired);
        }

        if seat.status == SeatStatus::Booked {
            return Err(ReservationError::AlreadyBooked);
        }

        if seat.status != SeatStatus::Locked || seat.locked_by.as_deref() != Some(user) {
            return Err(ReservationError::NotLockedByYou);
        }

        seat.status = SeatStatus::Booked;
        seat.locked_by = None;
        seat.lock_expiry = None;
        info!("Seat {} booked by {}", seat_id, user);
        Ok(seat.clone())
    }

    fn table(&self) -> std::sync::MutexGuard<'_, Vec<Seat>> {
        // Poison means a handler panicked mid-transition; the table can't be
        // trusted after that.
        self.seats.lock().expect("seat table mutex poisoned")
    }
}

fn valid_user(user: &str) -> Result<&str, ReservationError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(ReservationError::UserRequired);
    }
    Ok(user)
}

fn seat_mut(seats: &mut [Seat], seat_id: u32) -> Result<&mut Seat, ReservationError> {
    let idx = (seat_id as usize)
        .checked_sub(1)
        .ok_or(ReservationError::SeatNotFound)?;
    seats.get_mut(idx).ok_or(ReservationError::SeatNotFound)
}

fn lock_expired(seat: &Seat, now: i64) -> bool {
    seat.status == SeatStatus::Locked && seat.lock_expiry.is_some_and(|expiry| now > expiry)
}

fn reclaim(seat: &mut Seat) {
    seat.status = SeatStatus::Available;
    seat.locked_by = None;
    seat.lock_expiry = None;
}
