//! Tests for analytics tracking and aggregation

use super::store::{CounterStore, MemoryStore};
use super::tracker::Analytics;
use super::types::{PageView, StatsQuery};
use chrono::{Duration, Utc};
use std::sync::Arc;

fn analytics() -> (Analytics, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Analytics::new(store.clone(), true), store)
}

fn view(path: &str, country: &str) -> PageView {
    PageView {
        path: path.to_string(),
        country: country.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_track_and_aggregate_roundtrip() {
    let (analytics, _) = analytics();

    analytics.track_page_view(&view("/", "IT")).await;
    analytics.track_page_view(&view("/", "IT")).await;
    analytics.track_page_view(&view("/about", "DE")).await;

    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.total_views, 3);
    assert_eq!(stats.by_country.get("IT"), Some(&2));
    assert_eq!(stats.by_country.get("DE"), Some(&1));
    assert_eq!(stats.by_path.get("/"), Some(&2));
    assert_eq!(stats.by_path.get("/about"), Some(&1));
    assert_eq!(stats.bot_views, 0);
}

#[tokio::test]
async fn test_path_filter() {
    let (analytics, _) = analytics();

    analytics.track_page_view(&view("/", "IT")).await;
    analytics.track_page_view(&view("/about", "IT")).await;

    let stats = analytics
        .page_view_stats(&StatsQuery {
            path: Some("/about".into()),
            days: None,
        })
        .await;
    assert_eq!(stats.total_views, 1);
    assert_eq!(stats.by_path.len(), 1);
}

#[tokio::test]
async fn test_bot_and_referrer_tracking() {
    let (analytics, _) = analytics();

    analytics
        .track_page_view(&PageView {
            path: "/".into(),
            country: "US".into(),
            bot: Some("Googlebot".into()),
            referrer: Some("https://www.example.com/page".into()),
            ..Default::default()
        })
        .await;

    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.bot_views, 1);
    assert_eq!(stats.by_bot.get("Googlebot"), Some(&1));
    // Referrer normalized to its host without www.
    assert_eq!(stats.by_referrer.get("example.com"), Some(&1));
}

#[tokio::test]
async fn test_invalid_referrer_skipped() {
    let (analytics, _) = analytics();

    analytics
        .track_page_view(&PageView {
            path: "/".into(),
            country: "US".into(),
            referrer: Some("not a url".into()),
            ..Default::default()
        })
        .await;

    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.total_views, 1);
    assert!(stats.by_referrer.is_empty());
}

#[tokio::test]
async fn test_days_filter_excludes_cutoff_day() {
    let (analytics, store) = analytics();

    let today = Utc::now().date_naive();
    let fresh = format!("pv:{}-10:/:IT", today.format("%Y-%m-%d"));
    let cutoff_day = format!(
        "pv:{}-10:/:IT",
        (today - Duration::days(7)).format("%Y-%m-%d")
    );
    let stale = format!(
        "pv:{}-10:/:IT",
        (today - Duration::days(30)).format("%Y-%m-%d")
    );
    store.incr(&fresh).await.unwrap();
    store.incr(&cutoff_day).await.unwrap();
    store.incr(&stale).await.unwrap();

    // No filter: everything counts
    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.total_views, 3);

    // 7-day filter keeps only dates strictly after the cutoff day
    let stats = analytics
        .page_view_stats(&StatsQuery {
            path: None,
            days: Some(7),
        })
        .await;
    assert_eq!(stats.total_views, 1);
}

#[tokio::test]
async fn test_disabled_analytics_is_inert() {
    let store = Arc::new(MemoryStore::new());
    let analytics = Analytics::new(store.clone(), false);

    analytics.track_page_view(&view("/", "IT")).await;
    assert!(store.keys("").await.unwrap().is_empty());

    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.total_views, 0);
}

#[tokio::test]
async fn test_malformed_keys_are_ignored() {
    let (analytics, store) = analytics();

    store.incr("pv:garbage").await.unwrap();
    analytics.track_page_view(&view("/", "IT")).await;

    let stats = analytics.page_view_stats(&StatsQuery::default()).await;
    assert_eq!(stats.total_views, 1);
}
