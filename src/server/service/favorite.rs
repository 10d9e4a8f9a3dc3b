use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        model::favorite::{Favorite, FavoriteTarget},
    },
};

/// Service for managing the favorites of a user.
///
/// Checks are performed in a fixed order before anything is written: the user must exist,
/// then the target (when adding) or the link (when removing).
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites expanded with their target details.
    ///
    /// Links are returned in the order they were created. A link whose character or planet
    /// has since been deleted is skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, empty if there are none
    /// - `Err(Error::NotFoundError)` - No user with this ID
    /// - `Err(Error::InternalError)` - A stored link references both or neither target
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.require_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        let mut favorite_dtos = Vec::with_capacity(favorites.len());
        for model in favorites {
            let favorite = Favorite::try_from(model)?;

            match self.resolve_target(favorite.target).await? {
                Some(details) => favorite_dtos.push(details),
                None => tracing::warn!(
                    "Skipping favorite ID {} of user ID {}: {} no longer exists",
                    favorite.id,
                    user_id,
                    favorite.target
                ),
            }
        }

        Ok(favorite_dtos)
    }

    /// Adds `target` to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created link
    /// - `Err(Error::NotFoundError)` - User or target does not exist
    /// - `Err(Error::ConflictError)` - The user already has this favorite
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, Error> {
        self.require_user(user_id).await?;

        if self.resolve_target(target).await?.is_none() {
            return Err(NotFoundError::target(target).into());
        }

        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo.find(user_id, target).await?.is_some() {
            return Err(ConflictError::DuplicateFavorite(target).into());
        }

        // A concurrent request may insert the same link between the check and the insert
        let created = favorite_repo
            .create(user_id, target)
            .await
            .map_err(|e| duplicate_as_conflict(e, target))?;

        tracing::info!("Added {} to favorites of user ID {}", target, user_id);

        Favorite::try_from(created)
    }

    /// Removes `target` from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The link was deleted
    /// - `Err(Error::NotFoundError)` - User does not exist or has no such favorite
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        self.require_user(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo.find(user_id, target).await? else {
            return Err(NotFoundError::Favorite { user_id, target }.into());
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::info!("Removed {} from favorites of user ID {}", target, user_id);

        Ok(())
    }

    async fn require_user(&self, user_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id.into()).into());
        }

        Ok(())
    }

    /// Loads the target's details, `None` if it does not exist
    async fn resolve_target(&self, target: FavoriteTarget) -> Result<Option<FavoriteDto>, Error> {
        let details = match target {
            FavoriteTarget::Character(id) => PeopleRepository::new(self.db)
                .get(id)
                .await?
                .map(|character| FavoriteDto::Person(character.into())),
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .get(id)
                .await?
                .map(|planet| FavoriteDto::Planet(planet.into())),
        };

        Ok(details)
    }
}

/// Reports a unique index violation on insert as a duplicate favorite
pub(super) fn duplicate_as_conflict(err: DbErr, target: FavoriteTarget) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConflictError::DuplicateFavorite(target).into(),
        _ => err.into(),
    }
}
