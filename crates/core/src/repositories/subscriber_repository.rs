use crate::repositories::DbPool;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::subscriber::Subscriber;
use fanpix_primitives::schema::subscribers;
use uuid::Uuid;

pub trait SubscriberRepository: Send + Sync {
    fn find(&self, id: Uuid) -> Result<Option<Subscriber>, ApiError>;
    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Subscriber>, ApiError>;
}

pub struct PgSubscriberRepository {
    pool: DbPool,
}

impl PgSubscriberRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SubscriberRepository for PgSubscriberRepository {
    fn find(&self, id: Uuid) -> Result<Option<Subscriber>, ApiError> {
        let mut conn = self.pool.get()?;
        subscribers::table
            .find(id)
            .first::<Subscriber>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Subscriber>, ApiError> {
        let mut conn = self.pool.get()?;
        let mut query = subscribers::table
            .filter(
                subscribers::cpf_cnpj
                    .eq(normalized)
                    .or(subscribers::cpf_cnpj.eq(raw)),
            )
            .into_boxed();

        if let Some(exclude) = exclude {
            query = query.filter(subscribers::id.ne(exclude));
        }

        query
            .first::<Subscriber>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }
}
