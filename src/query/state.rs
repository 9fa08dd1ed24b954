//! Dashboard filter selection as a unidirectional reducer

use chrono::{DateTime, Duration, Utc};

use super::params::StatsQuery;

/// Default lookback window
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// The filter selection driving every stats fetch.
///
/// Explicit state plus actions instead of ambient per-widget state:
/// every change goes through [`apply`](Self::apply), and the current
/// selection lowers into a [`StatsQuery`] via [`query`](Self::query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFilters {
    /// Inclusive reporting window
    pub from: DateTime<Utc>,
    /// Inclusive end of the reporting window
    pub to: DateTime<Utc>,
    /// Selected advertiser, if any
    pub advertiser_id: Option<i64>,
    /// Selected campaign, scoped to the advertiser
    pub campaign_id: Option<i64>,
    /// Selected influencer, scoped to the advertiser
    pub influencer_id: Option<i64>,
}

/// A change to the dashboard selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Pick an advertiser. Campaign and influencer selections belong to
    /// the previous advertiser and are cleared.
    SelectAdvertiser(i64),
    /// Move the reporting window
    SetWindow {
        /// Inclusive start
        from: DateTime<Utc>,
        /// Inclusive end
        to: DateTime<Utc>,
    },
    /// Narrow to one campaign (or clear with `None`)
    SelectCampaign(Option<i64>),
    /// Narrow to one influencer (or clear with `None`)
    SelectInfluencer(Option<i64>),
    /// Back to the default window with nothing selected
    Reset,
}

impl DashboardFilters {
    /// Fresh selection: default lookback window ending now, no filters
    pub fn new() -> Self {
        let to = Utc::now();
        Self {
            from: to - Duration::days(DEFAULT_WINDOW_DAYS),
            to,
            advertiser_id: None,
            campaign_id: None,
            influencer_id: None,
        }
    }

    /// Apply one action to the selection
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::SelectAdvertiser(id) => {
                self.advertiser_id = Some(id);
                self.campaign_id = None;
                self.influencer_id = None;
            }
            FilterAction::SetWindow { from, to } => {
                self.from = from;
                self.to = to;
            }
            FilterAction::SelectCampaign(id) => {
                self.campaign_id = id;
            }
            FilterAction::SelectInfluencer(id) => {
                self.influencer_id = id;
            }
            FilterAction::Reset => {
                *self = Self::new();
            }
        }
    }

    /// Lower the selection into fetch parameters
    pub fn query(&self) -> StatsQuery {
        StatsQuery {
            from: Some(self.from),
            to: Some(self.to),
            advertiser_id: self.advertiser_id,
            campaign_id: self.campaign_id,
            influencer_id: self.influencer_id,
        }
    }
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self::new()
    }
}
