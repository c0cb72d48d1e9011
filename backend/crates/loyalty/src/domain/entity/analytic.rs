//! Analytic Entity
//!
//! Append-only visit records and the hourly report built from them.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::domain::value_object::ids::{AnalyticId, ClientId, StandId};

/// One check-in. Neither reference is enforced by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytic {
    pub analytic_id: AnalyticId,
    pub client_id: Option<ClientId>,
    pub stand_id: Option<StandId>,
    pub visited_at: DateTime<Utc>,
}

impl Analytic {
    /// Visit happening now
    pub fn record(client_id: Option<ClientId>, stand_id: Option<StandId>) -> Self {
        Self::record_at(client_id, stand_id, Utc::now())
    }

    pub fn record_at(
        client_id: Option<ClientId>,
        stand_id: Option<StandId>,
        visited_at: DateTime<Utc>,
    ) -> Self {
        Self {
            analytic_id: AnalyticId::new(),
            client_id,
            stand_id,
            visited_at,
        }
    }
}

/// Visit count for one UTC calendar date and hour of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticBucket {
    pub date: NaiveDate,
    /// 0..=23
    pub hour: i32,
    pub count: i64,
}

impl AnalyticBucket {
    /// Buckets ordered by date, then hour. Empty buckets are omitted.
    pub fn group<'a>(visits: impl IntoIterator<Item = &'a Analytic>) -> Vec<AnalyticBucket> {
        let mut counts: BTreeMap<(NaiveDate, i32), i64> = BTreeMap::new();
        for visit in visits {
            let key = (visit.visited_at.date_naive(), visit.visited_at.hour() as i32);
            *counts.entry(key).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|((date, hour), count)| AnalyticBucket { date, hour, count })
            .collect()
    }
}
