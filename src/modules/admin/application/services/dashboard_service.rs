use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use std::sync::Arc;
use tracing::error;

use crate::admin::application::domain::entities::{chart_window, ChartData, YearMonth};
use crate::admin::application::ports::incoming::use_cases::{
    AdminError, Dashboard, DashboardUseCase, RECENT_ITEMS,
};
use crate::admin::application::ports::outgoing::AdminQuery;
use crate::booking::application::ports::outgoing::{BookingListFilter, BookingQuery};
use crate::shared::api::PageRequest;

pub struct DashboardService<Q>
where
    Q: AdminQuery,
{
    query: Q,
    bookings: Arc<dyn BookingQuery>,
}

impl<Q> DashboardService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q, bookings: Arc<dyn BookingQuery>) -> Self {
        Self { query, bookings }
    }
}

fn repo_error(e: impl std::fmt::Display) -> AdminError {
    error!(error = %e, "Failed to build admin dashboard");
    AdminError::RepositoryError(e.to_string())
}

/// Midnight UTC on the first day of `month`.
fn month_start(month: YearMonth) -> Result<DateTime<Utc>, AdminError> {
    month
        .first_day()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .ok_or_else(|| repo_error(format!("invalid month {}-{}", month.year, month.month)))
}

#[async_trait]
impl<Q> DashboardUseCase for DashboardService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self, now: DateTime<Utc>) -> Result<Dashboard, AdminError> {
        let window = chart_window(now.date_naive());
        let this_month = month_start(YearMonth::of(now.date_naive()))?;
        let since = match window.first() {
            Some(first) => month_start(*first)?,
            None => this_month,
        };

        let recent_page = PageRequest {
            page: 1,
            limit: RECENT_ITEMS,
        };

        let (stats, (recent_bookings, _), recent_users, activity) = futures::try_join!(
            async { self.query.counts(this_month).await.map_err(repo_error) },
            async {
                self.bookings
                    .page(BookingListFilter::default(), recent_page)
                    .await
                    .map_err(repo_error)
            },
            async { self.query.recent_users(RECENT_ITEMS).await.map_err(repo_error) },
            async { self.query.monthly_activity(since).await.map_err(repo_error) },
        )?;

        Ok(Dashboard {
            stats,
            recent_bookings,
            recent_users,
            chart_data: ChartData::build(&window, &activity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::domain::entities::MonthlyActivity;
    use crate::admin::application::ports::outgoing::{AdminRepositoryError, DashboardCounts};
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::admin_mocks::{MockAdminQueryPort, MockBookingQueryPort};
    use crate::tests::support::fakes::sample_user;
    use chrono::TimeZone;
    use mockall::predicate::eq;
    use std::collections::HashMap;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn empty_bookings() -> MockBookingQueryPort {
        let mut bookings = MockBookingQueryPort::new();
        bookings
            .expect_page()
            .with(
                eq(BookingListFilter::default()),
                eq(PageRequest { page: 1, limit: 5 }),
            )
            .returning(|_, _| Ok((vec![], 0)));
        bookings
    }

    #[tokio::test]
    async fn assembles_stats_recent_items_and_chart() {
        let mut query = MockAdminQueryPort::new();
        query
            .expect_counts()
            .with(eq(midnight(2026, 10, 1)))
            .returning(|_| {
                Ok(DashboardCounts {
                    total_users: 40,
                    completed_bookings: 7,
                    total_revenue: 2100.0,
                    ..Default::default()
                })
            });
        query
            .expect_recent_users()
            .with(eq(5))
            .returning(|_| Ok(vec![sample_user("new@example.ma", Role::Customer, false)]));
        query
            .expect_monthly_activity()
            .with(eq(midnight(2025, 11, 1)))
            .returning(|_| {
                Ok(HashMap::from([(
                    YearMonth { year: 2026, month: 10 },
                    MonthlyActivity {
                        bookings: 3,
                        revenue: 600.0,
                    },
                )]))
            });

        let dashboard = DashboardService::new(query, Arc::new(empty_bookings()))
            .execute(at(2026, 10, 18))
            .await
            .unwrap();

        assert_eq!(dashboard.stats.total_users, 40);
        assert_eq!(dashboard.stats.total_revenue, 2100.0);
        assert_eq!(dashboard.recent_users.len(), 1);
        assert!(dashboard.recent_bookings.is_empty());
        assert_eq!(dashboard.chart_data.bookings.len(), 12);
        assert_eq!(dashboard.chart_data.bookings[0].month, "Nov");
        assert_eq!(dashboard.chart_data.bookings[11].count, 3);
        assert_eq!(dashboard.chart_data.revenue[11].total, 600.0);
    }

    #[tokio::test]
    async fn any_failing_query_fails_the_dashboard() {
        let mut query = MockAdminQueryPort::new();
        query
            .expect_counts()
            .returning(|_| Err(AdminRepositoryError::DatabaseError("timeout".into())));
        query.expect_recent_users().returning(|_| Ok(vec![]));
        query
            .expect_monthly_activity()
            .returning(|_| Ok(HashMap::new()));

        let result = DashboardService::new(query, Arc::new(empty_bookings()))
            .execute(at(2026, 1, 2))
            .await;

        assert!(matches!(result, Err(AdminError::RepositoryError(_))));
    }
}
