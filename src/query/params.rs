//! Query parameters scoping a stats fetch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for a journey fetch.
///
/// Mirrors the stats backend's filter set: an inclusive timestamp window
/// plus optional advertiser/campaign/influencer narrowing. Scoping the
/// data is the producer's job; the query only describes the scope and
/// travels with the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsQuery {
    /// Inclusive start of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Inclusive end of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to one advertiser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertiser_id: Option<i64>,
    /// Restrict to one campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    /// Restrict to one influencer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencer_id: Option<i64>,
}

impl StatsQuery {
    /// An unscoped query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive timestamp window
    pub fn with_window(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Restrict to an advertiser
    pub fn with_advertiser(mut self, advertiser_id: i64) -> Self {
        self.advertiser_id = Some(advertiser_id);
        self
    }

    /// Restrict to a campaign
    pub fn with_campaign(mut self, campaign_id: i64) -> Self {
        self.campaign_id = Some(campaign_id);
        self
    }

    /// Restrict to an influencer
    pub fn with_influencer(mut self, influencer_id: i64) -> Self {
        self.influencer_id = Some(influencer_id);
        self
    }

    /// True when no window and no entity filter is set
    pub fn is_unscoped(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.advertiser_id.is_none()
            && self.campaign_id.is_none()
            && self.influencer_id.is_none()
    }
}
