use std::fmt;

use crate::error::EcsError;

/// A lightweight entity handle - just an id. Id 0 is reserved as the
/// null handle and never names a real entity.
///
/// Handles are issued by whatever owns the entity universe (a registry);
/// this crate only uses them as keys into component pools. Conversion
/// back to the raw integer is explicit via [`Entity::id`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// The reserved null handle.
    pub const NULL: Entity = Entity { id: 0 };

    /// Wrap a raw identifier. Wrapping 0 yields the null handle; use the
    /// `TryFrom<u32>` impl to reject it instead.
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// The raw identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether this handle names a real entity.
    pub fn is_valid(&self) -> bool {
        self.id != 0
    }
}

impl TryFrom<u32> for Entity {
    type Error = EcsError;

    /// Checked construction for ids supplied from outside the engine.
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        if id == 0 {
            return Err(EcsError::NullEntityId);
        }
        Ok(Self { id })
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Entity({})", self.id)
        } else {
            write!(f, "Entity(null)")
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "null")
        }
    }
}
