use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder, Select,
};

/// Repository over any entity kind with an integer primary key.
///
/// Results of `list` and `filter` are ordered by primary key, which for auto-assigned
/// keys is insertion order.
pub struct EntityRepository<'a, E, C: ConnectionTrait> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, E, C> EntityRepository<'a, E, C>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    /// Creates a new instance of [`EntityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<E::Model>, DbErr> {
        Self::in_insertion_order(E::find()).all(self.db).await
    }

    /// Returns every record matching `condition`
    pub async fn filter(&self, condition: Condition) -> Result<Vec<E::Model>, DbErr> {
        Self::in_insertion_order(E::find().filter(condition))
            .all(self.db)
            .await
    }

    /// Inserts a record, the store assigns its ID
    pub async fn insert(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.update(self.db).await
    }

    /// Deletes a record by ID
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        E::delete_by_id(id).exec(self.db).await
    }

    fn in_insertion_order(query: Select<E>) -> Select<E> {
        E::PrimaryKey::iter().fold(query, |query, key| query.order_by_asc(key.into_column()))
    }
}
