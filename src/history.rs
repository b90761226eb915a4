use crate::errors::AppError;
use crate::models::{Breakdown, FootprintRecord};
use crate::storage::KvStore;
use chrono::{DateTime, Duration, Months, Utc};
use tracing::error;

pub const HISTORY_KEY: &str = "ecotrack_history";

const HISTORY_CAPACITY: usize = 30;

pub struct HistoryStore {
    kv: KvStore,
    records: Vec<FootprintRecord>,
}

impl HistoryStore {
    pub async fn load(kv: KvStore) -> Self {
        let records = match kv.read(HISTORY_KEY).await {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    error!("failed to parse history snapshot: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { kv, records }
    }

    pub fn records(&self) -> &[FootprintRecord] {
        &self.records
    }

    pub async fn add_record(
        &mut self,
        total: i64,
        breakdown: Breakdown,
    ) -> Result<FootprintRecord, AppError> {
        self.add_record_at(Utc::now(), total, breakdown).await
    }

    pub async fn add_record_at(
        &mut self,
        now: DateTime<Utc>,
        total: i64,
        breakdown: Breakdown,
    ) -> Result<FootprintRecord, AppError> {
        let record = FootprintRecord {
            id: self.next_id(now.timestamp_millis()),
            date: now,
            total,
            breakdown,
        };

        self.records.insert(0, record.clone());
        self.records.truncate(HISTORY_CAPACITY);
        self.persist().await?;

        Ok(record)
    }

    // Deletes the persisted key outright; a fresh load must start from
    // nothing, not from an empty snapshot.
    pub async fn clear(&mut self) -> Result<(), AppError> {
        self.records.clear();
        self.kv.remove(HISTORY_KEY).await
    }

    pub fn weekly_average(&self) -> f64 {
        self.weekly_average_at(Utc::now())
    }

    pub fn weekly_average_at(&self, now: DateTime<Utc>) -> f64 {
        self.average_since(now - Duration::days(7))
    }

    pub fn monthly_average(&self) -> f64 {
        self.monthly_average_at(Utc::now())
    }

    // Trailing calendar month with day clamping (Mar 31 looks back to Feb 28).
    pub fn monthly_average_at(&self, now: DateTime<Utc>) -> f64 {
        let cutoff = now
            .checked_sub_months(Months::new(1))
            .unwrap_or(now - Duration::days(30));
        self.average_since(cutoff)
    }

    fn average_since(&self, cutoff: DateTime<Utc>) -> f64 {
        let mut sum = 0i64;
        let mut count = 0u32;
        for record in self.records.iter().filter(|record| record.date > cutoff) {
            sum = sum.saturating_add(record.total);
            count += 1;
        }

        if count == 0 {
            0.0
        } else {
            sum as f64 / f64::from(count)
        }
    }

    // Millisecond timestamps make readable ids but two saves can land in the
    // same millisecond; bump until the id is unused.
    fn next_id(&self, now_ms: i64) -> String {
        let mut candidate = now_ms;
        loop {
            let id = candidate.to_string();
            if !self.records.iter().any(|record| record.id == id) {
                return id;
            }
            candidate += 1;
        }
    }

    async fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        self.kv.write(HISTORY_KEY, &payload).await
    }
}
