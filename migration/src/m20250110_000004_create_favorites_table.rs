use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250110_000001_create_user_table::User;

static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static IDX_FAVORITES_USER_PEOPLE: &str = "idx_favorites_user_id_people_id";
static IDX_FAVORITES_USER_PLANET: &str = "idx_favorites_user_id_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `people_id` and `planet_id` carry no foreign key: deleting a character or
        // planet leaves existing favorites in place.
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PeopleId))
                    .col(integer_null(Favorites::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLs are distinct in unique indexes, so each index only constrains rows
        // that target its own kind.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_PEOPLE)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PeopleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_PLANET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_PLANET)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_PEOPLE)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PeopleId,
    PlanetId,
}
