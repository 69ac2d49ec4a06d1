// src/prune.rs
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiError, SubscriptionApi};
use crate::classify::{classify, Disposition};
use crate::config::Credentials;
use crate::probe::{FeedProbe, ProbeOutcome};
use crate::subscription::Subscription;

/// Counters for one prune run, reported at the end and in the `--json` envelope.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub checked: usize,
    pub removed: usize,
    pub warnings: usize,
    pub failed_removals: usize,
    pub dry_run: bool,
}

/// Remove every subscription whose source URL is confirmed dead or
/// access-denied. Strictly sequential; the only fatal error is failing to
/// fetch the subscription list. Everything else is logged and skipped.
pub async fn run<A, P>(api: &A, probe: &P, cred: &Credentials) -> Result<RunSummary>
where
    A: SubscriptionApi,
    P: FeedProbe,
{
    let subscriptions = api
        .fetch_subscriptions()
        .await
        .context("fetch subscription list")?;

    let mut summary = RunSummary {
        dry_run: cred.dry_run,
        ..Default::default()
    };

    for sub in &subscriptions {
        summary.checked += 1;

        let Some(feed_url) = sub.feed_url.as_deref() else {
            warn!(id = ?sub.id, "subscription has no feed_url, skipping");
            summary.warnings += 1;
            continue;
        };

        let outcome = probe.probe(feed_url).await;
        match classify(&outcome) {
            Disposition::Keep => {}
            Disposition::Warn => {
                match &outcome {
                    ProbeOutcome::Missing => {
                        warn!(url = %feed_url, "feed returned no response");
                    }
                    ProbeOutcome::Status(status) => {
                        warn!(url = %feed_url, status = %status, "feed returned unexpected status");
                    }
                    // Failed never classifies as Warn
                    ProbeOutcome::Failed(err) => {
                        warn!(url = %feed_url, error = %err, "unexpected probe result");
                    }
                }
                summary.warnings += 1;
            }
            Disposition::Remove => {
                match &outcome {
                    ProbeOutcome::Failed(err) => {
                        info!(url = %feed_url, error = %err, "could not GET feed, removing");
                    }
                    ProbeOutcome::Status(status) => {
                        info!(url = %feed_url, status = %status, "feed is gone, removing");
                    }
                    ProbeOutcome::Missing => {}
                }
                match remove_subscription(api, cred, sub).await {
                    Ok(()) => summary.removed += 1,
                    Err(err) => {
                        warn!(url = %feed_url, error = %err, "failed to remove subscription");
                        summary.failed_removals += 1;
                    }
                }
            }
        }
    }

    info!(
        "🧹 Prune totals: checked={} removed={} warnings={} failed_removals={} dry_run={}",
        summary.checked, summary.removed, summary.warnings, summary.failed_removals, summary.dry_run
    );

    Ok(summary)
}

/// Delete one subscription, unless this is a dry run. Dry runs short-circuit
/// before any network I/O and report success.
async fn remove_subscription<A: SubscriptionApi>(
    api: &A,
    cred: &Credentials,
    sub: &Subscription,
) -> Result<(), ApiError> {
    if cred.dry_run {
        return Ok(());
    }
    let id = sub.id.ok_or(ApiError::MissingId)?;
    api.delete_subscription(id).await
}
