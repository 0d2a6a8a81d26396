//! Page-view tracking and read-time aggregation

use super::keys;
use super::store::CounterStore;
use super::types::{PageView, PageViewStats, StatsQuery};
use crate::utils::error::Result;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Analytics facade over a counter store
#[derive(Clone)]
pub struct Analytics {
    store: Arc<dyn CounterStore>,
    enabled: bool,
}

impl Analytics {
    pub fn new(store: Arc<dyn CounterStore>, enabled: bool) -> Self {
        Self { store, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a page view. Fire-and-forget: failures are logged and
    /// swallowed, never surfaced to the request path.
    pub async fn track_page_view(&self, view: &PageView) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.record(view).await {
            debug!(error = %e, "page view tracking failed");
        }
    }

    async fn record(&self, view: &PageView) -> Result<()> {
        let stamp = keys::hour_stamp();

        self.store
            .incr(&keys::page_view_key(&stamp, &view.path, &view.country))
            .await?;

        if let Some(bot) = &view.bot {
            self.store.incr(&keys::suffix_key("bot", &stamp, bot)).await?;
        }
        if let Some(referrer) = &view.referrer {
            if let Some(domain) = keys::referrer_domain(referrer) {
                self.store
                    .incr(&keys::suffix_key("ref", &stamp, &domain))
                    .await?;
            }
        }
        if let Some(browser) = &view.browser {
            self.store
                .incr(&keys::suffix_key("browser", &stamp, browser))
                .await?;
        }
        if let Some(os) = &view.os {
            self.store.incr(&keys::suffix_key("os", &stamp, os)).await?;
        }
        if let Some(device) = &view.device {
            self.store
                .incr(&keys::suffix_key("device", &stamp, device))
                .await?;
        }

        Ok(())
    }

    /// Aggregate page-view statistics. Fails gracefully to empty stats.
    pub async fn page_view_stats(&self, query: &StatsQuery) -> PageViewStats {
        if !self.enabled {
            return PageViewStats::default();
        }

        match self.aggregate(query).await {
            Ok(stats) => stats,
            Err(e) => {
                debug!(error = %e, "stats aggregation failed");
                PageViewStats::default()
            }
        }
    }

    async fn aggregate(&self, query: &StatsQuery) -> Result<PageViewStats> {
        let cutoff = query.days.map(cutoff_date);
        let cutoff = cutoff.as_deref();
        let mut stats = PageViewStats::default();

        let matching: Vec<String> = self
            .store
            .keys("pv:")
            .await?
            .into_iter()
            .filter(|key| match keys::parse_page_view_key(key) {
                Some((date, path, _)) => {
                    within_cutoff(date, cutoff)
                        && query.path.as_deref().map_or(true, |p| p == path)
                }
                None => false,
            })
            .collect();
        let counts = self.store.multi_get(&matching).await?;

        for (key, count) in matching.iter().zip(counts) {
            if let Some((date, path, country)) = keys::parse_page_view_key(key) {
                stats.total_views += count;
                *stats.by_country.entry(country.to_string()).or_insert(0) += count;
                *stats.by_path.entry(path.to_string()).or_insert(0) += count;
                *stats.by_date.entry(date.to_string()).or_insert(0) += count;
            }
        }

        stats.by_bot = self.suffix_stats("bot", cutoff).await?;
        stats.bot_views = stats.by_bot.values().sum();
        stats.by_referrer = self.suffix_stats("ref", cutoff).await?;
        stats.by_browser = self.suffix_stats("browser", cutoff).await?;
        stats.by_os = self.suffix_stats("os", cutoff).await?;
        stats.by_device = self.suffix_stats("device", cutoff).await?;

        Ok(stats)
    }

    async fn suffix_stats(
        &self,
        prefix: &str,
        cutoff: Option<&str>,
    ) -> Result<HashMap<String, u64>> {
        let matching: Vec<String> = self
            .store
            .keys(&format!("{}:", prefix))
            .await?
            .into_iter()
            .filter(|key| match keys::parse_suffix_key(prefix, key) {
                Some((date, _)) => within_cutoff(date, cutoff),
                None => false,
            })
            .collect();
        let counts = self.store.multi_get(&matching).await?;

        let mut out = HashMap::new();
        for (key, count) in matching.iter().zip(counts) {
            if let Some((_, value)) = keys::parse_suffix_key(prefix, key) {
                *out.entry(value.to_string()).or_insert(0) += count;
            }
        }
        Ok(out)
    }
}

/// Keys dated strictly after the cutoff day are kept; the cutoff day
/// itself is excluded.
fn within_cutoff(date: &str, cutoff: Option<&str>) -> bool {
    cutoff.map_or(true, |c| date > c)
}

fn cutoff_date(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
