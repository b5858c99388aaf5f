use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, SqlErr,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Classify a SeaORM error for the domain.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Update the row behind `active_model`, inserting it when it does not
/// exist yet. Every column must be `Set`.
pub(crate) async fn upsert<A, C>(
    db: &C,
    active_model: A,
) -> Result<<A::Entity as EntityTrait>::Model, RepoError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait + Sync,
{
    match active_model.clone().update(db).await {
        Ok(model) => Ok(model),
        Err(DbErr::RecordNotUpdated) => active_model.insert(db).await.map_err(map_db_err),
        Err(e) => Err(map_db_err(e)),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = upsert(&self.db, active_model).await?;
        Ok(model.into())
    }
}
