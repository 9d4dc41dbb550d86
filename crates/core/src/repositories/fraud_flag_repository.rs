use crate::repositories::DbPool;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::fraud_dto::FraudFlagFilter;
use fanpix_primitives::models::fraud_flag::{FraudFlag, NewFraudFlag};
use fanpix_primitives::schema::fraud_flags;
use uuid::Uuid;

const DEFAULT_LIST_LIMIT: i64 = 100;

/// Append-only flag store. Creation comes from any component; the only
/// mutation is the administrative resolve.
pub trait FraudFlagRepository: Send + Sync {
    fn create(&self, flag: NewFraudFlag) -> Result<FraudFlag, ApiError>;
    fn find(&self, id: Uuid) -> Result<Option<FraudFlag>, ApiError>;
    fn resolve(&self, id: Uuid, resolver: Uuid, resolution: &str) -> Result<FraudFlag, ApiError>;
    fn list(&self, filter: &FraudFlagFilter) -> Result<Vec<FraudFlag>, ApiError>;
}

pub struct PgFraudFlagRepository {
    pool: DbPool,
}

impl PgFraudFlagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl FraudFlagRepository for PgFraudFlagRepository {
    fn create(&self, flag: NewFraudFlag) -> Result<FraudFlag, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(fraud_flags::table)
            .values(&flag)
            .get_result::<FraudFlag>(&mut conn)
            .map_err(ApiError::from)
    }

    fn find(&self, id: Uuid) -> Result<Option<FraudFlag>, ApiError> {
        let mut conn = self.pool.get()?;
        fraud_flags::table
            .find(id)
            .first::<FraudFlag>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn resolve(&self, id: Uuid, resolver: Uuid, resolution: &str) -> Result<FraudFlag, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(fraud_flags::table.find(id))
            .set((
                fraud_flags::is_resolved.eq(true),
                fraud_flags::resolved_by.eq(resolver),
                fraud_flags::resolution.eq(resolution),
            ))
            .get_result::<FraudFlag>(&mut conn)
            .map_err(ApiError::from)
    }

    fn list(&self, filter: &FraudFlagFilter) -> Result<Vec<FraudFlag>, ApiError> {
        let mut conn = self.pool.get()?;
        let mut query = fraud_flags::table.into_boxed();

        if let Some(kind) = filter.flag_kind {
            query = query.filter(fraud_flags::flag_kind.eq(kind));
        }
        if let Some(creator_id) = filter.creator_id {
            query = query.filter(fraud_flags::creator_id.eq(creator_id));
        }
        if let Some(subscriber_id) = filter.subscriber_id {
            query = query.filter(fraud_flags::subscriber_id.eq(subscriber_id));
        }
        if let Some(is_resolved) = filter.is_resolved {
            query = query.filter(fraud_flags::is_resolved.eq(is_resolved));
        }
        if let Some(min_severity) = filter.min_severity {
            query = query.filter(fraud_flags::severity.ge(min_severity));
        }

        query
            .order(fraud_flags::created_at.desc())
            .limit(filter.limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .load::<FraudFlag>(&mut conn)
            .map_err(ApiError::from)
    }
}
