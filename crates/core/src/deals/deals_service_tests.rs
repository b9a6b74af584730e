use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::cycles::CycleCalendar;
use crate::deals::{DealMetricsService, DealMetricsServiceTrait};
use crate::Error;
use paycycle_crm_client::{CrmError, DealListItem, DealProvider};

// ============== Mock Provider ==============

/// Deal feed backed by a fixed list; range queries filter on
/// `date_sold` the way the real endpoint does.
struct MockDealProvider {
    deals: Vec<DealListItem>,
}

impl MockDealProvider {
    fn new(sold_days: &[&str]) -> Self {
        let deals = sold_days
            .iter()
            .map(|day| DealListItem {
                date_sold: Some(day.to_string()),
                agent_id: Some("310".to_string()),
                ..Default::default()
            })
            .collect();
        Self { deals }
    }
}

#[async_trait]
impl DealProvider for MockDealProvider {
    async fn fetch_agent_deals(
        &self,
        _agent_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DealListItem>, CrmError> {
        Ok(self
            .deals
            .iter()
            .filter(|deal| {
                deal.date_sold_day()
                    .is_some_and(|day| day >= date_from && day <= date_to)
            })
            .cloned()
            .collect())
    }

    async fn fetch_deals_since(
        &self,
        date_from: NaiveDate,
    ) -> Result<Vec<DealListItem>, CrmError> {
        Ok(self
            .deals
            .iter()
            .filter(|deal| deal.date_sold_day().is_some_and(|day| day >= date_from))
            .cloned()
            .collect())
    }
}

/// Provider whose every call fails, for propagation tests.
struct FailingDealProvider;

#[async_trait]
impl DealProvider for FailingDealProvider {
    async fn fetch_agent_deals(
        &self,
        _: &str,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<Vec<DealListItem>, CrmError> {
        Err(CrmError::Timeout)
    }

    async fn fetch_deals_since(&self, _: NaiveDate) -> Result<Vec<DealListItem>, CrmError> {
        Err(CrmError::Timeout)
    }
}

// ============== Helpers ==============

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_service(sold_days: &[&str]) -> DealMetricsService {
    DealMetricsService::new(
        Arc::new(MockDealProvider::new(sold_days)),
        CycleCalendar::standard(),
    )
}

// ============== Tests ==============

#[tokio::test]
async fn test_snapshot_counts_cycle_windows() {
    // Today 2025-01-20 sits in cycle index 2 (01-11..01-24);
    // previous cycle is 2024-12-28..2025-01-10.
    let service = make_service(&[
        "2025-01-12",
        "2025-01-15",
        "2025-01-20",
        "2025-01-02", // previous cycle
        "2024-12-20", // two cycles back, outside both windows
    ]);

    let snapshot = service
        .cycle_snapshot("310", date("2025-01-20"))
        .await
        .unwrap();

    assert_eq!(snapshot.current_cycle.unwrap().index, 2);
    assert_eq!(snapshot.previous_cycle.unwrap().index, 1);
    assert_eq!(snapshot.cycle_deals, 3);
    assert_eq!(snapshot.previous_cycle_deals, 1);

    // 3 deals: starter tier, no bonus yet
    assert_eq!(snapshot.tier.rate, dec!(15));
    assert_eq!(snapshot.bonus, dec!(0));
    assert_eq!(snapshot.payout, dec!(45));
    assert_eq!(snapshot.previous_payout, dec!(15));
    assert_eq!(snapshot.tier_progress.next_threshold, Some(70));
}

#[tokio::test]
async fn test_snapshot_bucket_counts() {
    // 2025-06-18 is a Wednesday; its week started Monday 2025-06-16.
    let service = make_service(&[
        "2025-06-18",
        "2025-06-18 09:15:00",
        "2025-06-17", // this week, not today
        "2025-06-02", // this month, previous week
        "2025-03-03", // this year, previous month
    ]);

    let snapshot = service
        .cycle_snapshot("310", date("2025-06-18"))
        .await
        .unwrap();

    assert_eq!(snapshot.counts.daily, 2);
    assert_eq!(snapshot.counts.weekly, 3);
    assert_eq!(snapshot.counts.monthly, 4);
    assert_eq!(snapshot.counts.yearly, 5);
}

#[tokio::test]
async fn test_snapshot_outside_calendar_has_no_cycle_data() {
    let service = make_service(&["2030-06-01"]);

    let snapshot = service
        .cycle_snapshot("310", date("2030-06-01"))
        .await
        .unwrap();

    assert!(snapshot.current_cycle.is_none());
    assert!(snapshot.previous_cycle.is_none());
    assert_eq!(snapshot.cycle_deals, 0);
    assert_eq!(snapshot.payout, dec!(0));
    // Calendar-independent buckets still count
    assert_eq!(snapshot.counts.daily, 1);
    assert_eq!(snapshot.counts.yearly, 1);
}

#[tokio::test]
async fn test_snapshot_propagates_upstream_failure() {
    let service = DealMetricsService::new(
        Arc::new(FailingDealProvider),
        CycleCalendar::standard(),
    );

    let err = service
        .cycle_snapshot("310", date("2025-01-20"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Crm(CrmError::Timeout)));
}

#[test]
fn test_bucket_counts_week_boundary() {
    let service = make_service(&[]);
    // 2025-06-22 is a Sunday; its week started Monday 2025-06-16.
    let deals: Vec<DealListItem> = ["2025-06-22", "2025-06-16", "2025-06-15"]
        .iter()
        .map(|day| DealListItem {
            date_sold: Some(day.to_string()),
            ..Default::default()
        })
        .collect();

    let counts = service.bucket_counts(&deals, date("2025-06-22"));

    assert_eq!(counts.daily, 1);
    assert_eq!(counts.weekly, 2);
    assert_eq!(counts.monthly, 3);
}

#[test]
fn test_bucket_counts_skips_unparseable_dates() {
    let service = make_service(&[]);
    let deals = vec![
        DealListItem {
            date_sold: Some("pending".to_string()),
            ..Default::default()
        },
        DealListItem::default(),
    ];

    let counts = service.bucket_counts(&deals, date("2025-06-22"));

    assert_eq!(counts, crate::deals::DealCounts::default());
}
