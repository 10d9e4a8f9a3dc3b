use std::fmt;

use crate::server::{error::Error, model::db::FavoriteModel};

/// The character or planet a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    /// A character from the `people` table.
    Character(i32),
    /// A planet from the `planet` table.
    Planet(i32),
}

impl FavoriteTarget {
    /// Value stored in the `people_id` column for this target.
    pub fn people_id(&self) -> Option<i32> {
        match self {
            Self::Character(id) => Some(*id),
            Self::Planet(_) => None,
        }
    }

    /// Value stored in the `planet_id` column for this target.
    pub fn planet_id(&self) -> Option<i32> {
        match self {
            Self::Character(_) => None,
            Self::Planet(id) => Some(*id),
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(id) => write!(f, "character ID {}", id),
            Self::Planet(id) => write!(f, "planet ID {}", id),
        }
    }
}

/// A user's favorite character or planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    /// Row ID of the stored link.
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Decodes a stored row, rejecting rows that reference both or neither target.
impl TryFrom<FavoriteModel> for Favorite {
    type Error = Error;

    fn try_from(model: FavoriteModel) -> Result<Self, Self::Error> {
        let target = match (model.people_id, model.planet_id) {
            (Some(people_id), None) => FavoriteTarget::Character(people_id),
            (None, Some(planet_id)) => FavoriteTarget::Planet(planet_id),
            (people_id, planet_id) => {
                return Err(Error::InternalError(format!(
                    "Favorite ID {} must reference exactly one target, found people_id {:?} and planet_id {:?}",
                    model.id, people_id, planet_id
                )))
            }
        };

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}
