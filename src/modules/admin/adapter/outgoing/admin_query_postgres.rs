use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QueryResult, QuerySelect, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::domain::entities::{MonthlyActivity, YearMonth};
use crate::admin::application::ports::outgoing::{
    AdminArtisanFilter, AdminArtisanRow, AdminBookingRow, AdminQuery, AdminRepositoryError,
    AdminUserFilter, DashboardCounts,
};
use crate::artisan::adapter::outgoing::sea_orm_entity::artisans;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::adapter::outgoing::sea_orm_entity::bookings;
use crate::shared::api::PageRequest;

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn artisans_matching(filter: &AdminArtisanFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(status) = filter.status {
            condition = condition.add(artisans::Column::ApprovalStatus.eq(status.as_str()));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            condition = condition.add(
                Condition::any()
                    .add(Expr::cust_with_values(
                        "EXISTS (SELECT 1 FROM jsonb_array_elements(artisans.services) AS s \
                         WHERE s->>'name' ILIKE ?)",
                        [pattern.clone()],
                    ))
                    .add(Expr::cust_with_values(
                        "EXISTS (SELECT 1 FROM users u \
                         WHERE u.id = artisans.user_id AND u.full_name ILIKE ?)",
                        [pattern],
                    )),
            );
        }

        condition
    }

    fn users_matching(filter: &AdminUserFilter) -> Condition {
        let mut condition = Condition::all().add(users::Column::Role.ne(Role::Admin.as_str()));

        if let Some(role) = filter.role {
            condition = condition.add(users::Column::Role.eq(role.as_str()));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            condition = condition.add(
                Condition::any()
                    .add(Expr::col(users::Column::FullName).ilike(&pattern))
                    .add(Expr::col(users::Column::Email).ilike(&pattern)),
            );
        }

        condition
    }

    async fn users_by_id(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, users::Model>, AdminRepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }

    async fn with_owners(
        &self,
        models: Vec<artisans::Model>,
    ) -> Result<Vec<AdminArtisanRow>, AdminRepositoryError> {
        let owners = self
            .users_by_id(models.iter().map(|m| m.user_id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| AdminArtisanRow {
                user: owners.get(&m.user_id).map(users::Model::to_repository_result),
                artisan: m.to_repository_result(),
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    AdminRepositoryError::DatabaseError(e.to_string())
}

fn count(row: &QueryResult, column: &str) -> Result<u64, DbErr> {
    row.try_get::<i64>("", column).map(|n| n.max(0) as u64)
}

fn counts_stmt(month_start: DateTime<Utc>) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        SELECT
          (SELECT COUNT(*) FROM users WHERE role <> 'admin') AS total_users,
          (SELECT COUNT(*) FROM artisans) AS total_artisans,
          (SELECT COUNT(*) FROM bookings) AS total_bookings,
          (SELECT COUNT(*) FROM bookings WHERE status = 'pending') AS pending_bookings,
          (SELECT COUNT(*) FROM bookings WHERE status = 'completed') AS completed_bookings,
          (SELECT COALESCE(SUM(total_price), 0)::float8
             FROM bookings WHERE status = 'completed') AS total_revenue,
          (SELECT COUNT(*) FROM users
             WHERE role <> 'admin' AND created_at >= $1) AS new_users_this_month,
          (SELECT COUNT(*) FROM artisans WHERE created_at >= $1) AS new_artisans_this_month
        "#,
        vec![month_start.into()],
    )
}

fn monthly_activity_stmt(since: DateTime<Utc>) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        SELECT
          EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')::int4 AS year,
          EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')::int4 AS month,
          COUNT(*) AS bookings,
          COALESCE(SUM(total_price) FILTER (WHERE status = 'completed'), 0)::float8 AS revenue
        FROM bookings
        WHERE created_at >= $1
        GROUP BY 1, 2
        "#,
        vec![since.into()],
    )
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn page_artisans(
        &self,
        filter: AdminArtisanFilter,
        page: PageRequest,
    ) -> Result<(Vec<AdminArtisanRow>, u64), AdminRepositoryError> {
        let query = artisans::Entity::find()
            .filter(Self::artisans_matching(&filter))
            .order_by_desc(artisans::Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok((self.with_owners(models).await?, total))
    }

    async fn find_artisan(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<AdminArtisanRow>, AdminRepositoryError> {
        let Some(model) = artisans::Entity::find_by_id(artisan_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.with_owners(vec![model]).await?.pop())
    }

    async fn page_users(
        &self,
        filter: AdminUserFilter,
        page: PageRequest,
    ) -> Result<(Vec<UserResult>, u64), AdminRepositoryError> {
        let query = users::Entity::find()
            .filter(Self::users_matching(&filter))
            .order_by_desc(users::Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok((models.iter().map(users::Model::to_repository_result).collect(), total))
    }

    async fn recent_users(&self, limit: u64) -> Result<Vec<UserResult>, AdminRepositoryError> {
        let models = users::Entity::find()
            .filter(users::Column::Role.ne(Role::Admin.as_str()))
            .order_by_desc(users::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(users::Model::to_repository_result).collect())
    }

    async fn counts(
        &self,
        month_start: DateTime<Utc>,
    ) -> Result<DashboardCounts, AdminRepositoryError> {
        let row = self
            .db
            .query_one(counts_stmt(month_start))
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                AdminRepositoryError::DatabaseError("Dashboard counts returned no rows".to_string())
            })?;

        let read = || -> Result<DashboardCounts, DbErr> {
            Ok(DashboardCounts {
                total_users: count(&row, "total_users")?,
                total_artisans: count(&row, "total_artisans")?,
                total_bookings: count(&row, "total_bookings")?,
                pending_bookings: count(&row, "pending_bookings")?,
                completed_bookings: count(&row, "completed_bookings")?,
                total_revenue: row.try_get("", "total_revenue")?,
                new_users_this_month: count(&row, "new_users_this_month")?,
                new_artisans_this_month: count(&row, "new_artisans_this_month")?,
            })
        };

        read().map_err(map_db_err)
    }

    async fn monthly_activity(
        &self,
        since: DateTime<Utc>,
    ) -> Result<HashMap<YearMonth, MonthlyActivity>, AdminRepositoryError> {
        let rows = self
            .db
            .query_all(monthly_activity_stmt(since))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| {
                let year: i32 = row.try_get("", "year")?;
                let month: i32 = row.try_get("", "month")?;
                Ok((
                    YearMonth {
                        year,
                        month: month.clamp(1, 12) as u32,
                    },
                    MonthlyActivity {
                        bookings: count(row, "bookings")?,
                        revenue: row.try_get("", "revenue")?,
                    },
                ))
            })
            .collect::<Result<HashMap<_, _>, DbErr>>()
            .map_err(map_db_err)
    }

    async fn users_for_export(&self) -> Result<Vec<UserResult>, AdminRepositoryError> {
        let models = users::Entity::find()
            .filter(users::Column::Role.ne(Role::Admin.as_str()))
            .order_by_desc(users::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(users::Model::to_repository_result).collect())
    }

    async fn artisans_for_export(&self) -> Result<Vec<AdminArtisanRow>, AdminRepositoryError> {
        let models = artisans::Entity::find()
            .order_by_desc(artisans::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_owners(models).await
    }

    async fn bookings_for_export(&self) -> Result<Vec<AdminBookingRow>, AdminRepositoryError> {
        let models = bookings::Entity::find()
            .order_by_desc(bookings::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let artisan_owner: HashMap<Uuid, Uuid> = artisans::Entity::find()
            .filter(artisans::Column::Id.is_in(models.iter().map(|m| m.artisan_id)))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|a| (a.id, a.user_id))
            .collect();

        let people = self
            .users_by_id(
                models
                    .iter()
                    .map(|m| m.customer_id)
                    .chain(artisan_owner.values().copied())
                    .collect(),
            )
            .await?;

        Ok(models
            .into_iter()
            .map(|m| AdminBookingRow {
                customer: people.get(&m.customer_id).map(users::Model::to_repository_result),
                artisan_name: artisan_owner
                    .get(&m.artisan_id)
                    .and_then(|user_id| people.get(user_id))
                    .map(|u| u.full_name.clone()),
                booking: m.to_repository_result(),
            })
            .collect())
    }
}
