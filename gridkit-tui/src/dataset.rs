//! Demo dataset: a fleet of service deployments.

use chrono::{Days, NaiveDate};
use gridkit::{GridRow, RowKey};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Degraded,
    Stopped,
    /// Decommissioned; cannot be selected.
    Retired,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Degraded => "degraded",
            Self::Stopped => "stopped",
            Self::Retired => "retired",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deployment {
    pub id: i64,
    pub service: &'static str,
    pub region: &'static str,
    pub status: Status,
    pub replicas: u32,
    pub cpu: f64,
    pub monthly_cost: f64,
    pub updated: NaiveDate,
    pub owner: &'static str,
}

impl GridRow for Deployment {
    fn id(&self) -> Option<RowKey> {
        Some(RowKey::Int(self.id))
    }
}

const SERVICES: [&str; 10] = [
    "billing-api",
    "checkout",
    "catalog",
    "search-indexer",
    "auth-gateway",
    "notifications",
    "media-transcoder",
    "ledger",
    "recommendations",
    "edge-cache",
];

const REGIONS: [&str; 6] = [
    "us-east-1",
    "us-west-2",
    "eu-west-1",
    "eu-central-1",
    "ap-south-1",
    "ap-northeast-1",
];

const OWNERS: [&str; 4] = ["payments", "platform", "growth", "infra"];

/// Seed for the demo fleet, so every run shows the same rows.
const SEED: u64 = 0x6772_6964;

/// Generate `count` deployments with ids `1..=count`, updated on or before
/// `today`. The same inputs always produce the same rows.
pub fn generate(count: usize, today: NaiveDate) -> Vec<Deployment> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (1..=count as i64)
        .map(|id| {
            let status = match rng.random_range(0..20) {
                0 => Status::Retired,
                1 | 2 => Status::Stopped,
                3..=5 => Status::Degraded,
                _ => Status::Running,
            };
            let replicas: u32 = match status {
                Status::Retired | Status::Stopped => 0,
                _ => rng.random_range(1..=24),
            };
            let (cpu, monthly_cost) = if replicas == 0 {
                (0.0, 0.0)
            } else {
                let cpu = f64::from(rng.random_range(0..1_000u32)) / 10.0;
                let per_replica = 40.0 + f64::from(rng.random_range(0..36_000u32)) / 100.0;
                (cpu, f64::from(replicas) * per_replica)
            };
            let age = Days::new(rng.random_range(0..365));

            Deployment {
                id,
                service: SERVICES.choose(&mut rng).copied().unwrap_or_default(),
                region: REGIONS.choose(&mut rng).copied().unwrap_or_default(),
                status,
                replicas,
                cpu,
                monthly_cost,
                updated: today.checked_sub_days(age).unwrap_or(today),
                owner: OWNERS.choose(&mut rng).copied().unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(50, today()), generate(50, today()));
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let rows = generate(1_000, today());
        assert_eq!(rows.len(), 1_000);
        assert_eq!(rows.first().map(|row| row.id), Some(1));
        assert_eq!(rows.last().map(|row| row.id), Some(1_000));
    }

    #[test]
    fn test_values_in_range() {
        for row in generate(2_000, today()) {
            assert!(row.updated <= today());
            assert!((0.0..100.0).contains(&row.cpu));
            if matches!(row.status, Status::Retired | Status::Stopped) {
                assert_eq!(row.replicas, 0);
                assert_eq!(row.monthly_cost, 0.0);
            }
        }
    }

    #[test]
    fn test_rows_are_labelled() {
        for row in generate(200, today()) {
            assert!(SERVICES.contains(&row.service));
            assert!(REGIONS.contains(&row.region));
            assert!(OWNERS.contains(&row.owner));
        }
    }

    #[test]
    fn test_mix_has_every_status() {
        let rows = generate(500, today());
        for status in [
            Status::Running,
            Status::Degraded,
            Status::Stopped,
            Status::Retired,
        ] {
            assert!(rows.iter().any(|row| row.status == status), "{status:?}");
        }
    }
}
