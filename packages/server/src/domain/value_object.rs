//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::error::ValueObjectError;

/// Room identifier value object.
///
/// Wraps a UUID generated server-side; clients never choose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Create a RoomId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a RoomId from its textual form (e.g. a request path segment).
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::RoomIdInvalidFormat` if `id` is not a UUID.
    pub fn parse(id: &str) -> Result<Self, ValueObjectError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| ValueObjectError::RoomIdInvalidFormat(id.to_string()))
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The recognised availability states of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityKind {
    Free,
    Reserved,
    InUse,
}

impl AvailabilityKind {
    pub const ALL: [AvailabilityKind; 3] = [Self::Free, Self::Reserved, Self::InUse];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Reserved => "reserved",
            Self::InUse => "inuse",
        }
    }
}

impl FromStr for AvailabilityKind {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValueObjectError::InvalidAvailability(s.to_string()))
    }
}

impl fmt::Display for AvailabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability value object.
///
/// Rooms are always created with one of the [`AvailabilityKind`] values, but
/// updates store the requested string as-is, so the stored value may fall
/// outside the recognised set. Use [`Availability::kind`] to check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Availability(String);

impl Availability {
    /// Create a validated Availability.
    ///
    /// # Arguments
    ///
    /// * `value` - One of `free`, `reserved`, `inuse`
    ///
    /// # Returns
    ///
    /// A Result containing the Availability or an error if validation fails
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        value.parse::<AvailabilityKind>()?;
        Ok(Self(value))
    }

    /// Create an Availability without checking it against the known states.
    pub fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// The recognised state, if the stored value is one.
    pub fn kind(&self) -> Option<AvailabilityKind> {
        self.0.parse().ok()
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<AvailabilityKind> for Availability {
    fn from(kind: AvailabilityKind) -> Self {
        Self(kind.as_str().to_string())
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
