//! Core domain models for the room service.

use super::{
    error::RoomError,
    value_object::{Availability, RoomId},
};

/// Represents the single managed room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Current availability
    pub availability: Availability,
}

impl Room {
    /// Create a new room with the given ID and availability
    pub fn new(id: RoomId, availability: Availability) -> Self {
        Self { id, availability }
    }
}

/// Result of a successful availability update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The requested availability was already set; nothing changed
    Unchanged,
    /// The availability was changed
    Updated,
}

/// Holds at most one room.
///
/// The store is either empty or occupied. Creating a room always replaces
/// the current one; deleting and updating require the id of the room that
/// is currently held.
#[derive(Debug, Clone, Default)]
pub struct RoomStore {
    current: Option<Room>,
}

impl RoomStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The room currently held, if any
    pub fn current(&self) -> Option<&Room> {
        self.current.as_ref()
    }

    /// Replace the held room unconditionally, returning the previous one
    pub fn replace(&mut self, room: Room) -> Option<Room> {
        self.current.replace(room)
    }

    /// Remove the held room if `id` is exactly its canonical (lower-case,
    /// hyphenated) form
    ///
    /// Other spellings of the same UUID do not match.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::NotFound` if the store is empty or holds a different room
    pub fn remove(&mut self, id: &str) -> Result<Room, RoomError> {
        match self.current.take_if(|room| room.id.to_string() == id) {
            Some(room) => Ok(room),
            None => Err(RoomError::NotFound(id.to_string())),
        }
    }

    /// Set the availability of the held room if its id matches
    ///
    /// A request that matches both id and availability is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::NotFound` if the store is empty or holds a different room
    pub fn update_availability(
        &mut self,
        id: &RoomId,
        availability: Availability,
    ) -> Result<UpdateOutcome, RoomError> {
        match self.current.as_mut() {
            Some(room) if room.id == *id => {
                if room.availability == availability {
                    return Ok(UpdateOutcome::Unchanged);
                }
                room.availability = availability;
                Ok(UpdateOutcome::Updated)
            }
            _ => Err(RoomError::NotFound(id.to_string())),
        }
    }
}
