use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::booking::application::domain::entities::BookingStatus;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
];

pub const CHART_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month as usize - 1) % 12]
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn months_back(&self, n: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - n as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

/// The last [`CHART_MONTHS`] months, oldest first, ending with the month of `today`.
pub fn chart_window(today: NaiveDate) -> Vec<YearMonth> {
    let current = YearMonth::of(today);
    (0..CHART_MONTHS)
        .rev()
        .map(|back| current.months_back(back))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyActivity {
    pub bookings: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRevenue {
    pub month: &'static str,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub bookings: Vec<MonthCount>,
    pub revenue: Vec<MonthRevenue>,
}

impl ChartData {
    /// Months without activity are reported as zero.
    pub fn build(window: &[YearMonth], activity: &HashMap<YearMonth, MonthlyActivity>) -> Self {
        let (bookings, revenue) = window
            .iter()
            .map(|ym| {
                let a = activity.get(ym).copied().unwrap_or_default();
                (
                    MonthCount {
                        month: ym.label(),
                        count: a.bookings,
                    },
                    MonthRevenue {
                        month: ym.label(),
                        total: a.revenue,
                    },
                )
            })
            .unzip();

        Self { bookings, revenue }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Users,
    Artisans,
    Bookings,
    All,
}

impl ExportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "users" => Some(ExportKind::Users),
            "artisans" => Some(ExportKind::Artisans),
            "bookings" => Some(ExportKind::Bookings),
            "all" => Some(ExportKind::All),
            _ => None,
        }
    }

    pub fn includes(&self, other: ExportKind) -> bool {
        *self == ExportKind::All || *self == other
    }
}

pub fn booking_status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "En attente",
        BookingStatus::Confirmed => "Confirmée",
        BookingStatus::InProgress => "En cours",
        BookingStatus::Completed => "Terminée",
        BookingStatus::Cancelled => "Annulée",
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Oui"
    } else {
        "Non"
    }
}

/// `dd/mm/yyyy`, as French locales print dates.
pub fn french_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
