use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Rx,
    Scaled,
}

/// Finest-grained competitive category: gender × skill tier.
///
/// The vocabulary is closed. Values outside it are rejected when parsing,
/// never coerced onto a nearby division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    MenRx,
    MenScaled,
    WomenRx,
    WomenScaled,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::MenRx,
        Division::MenScaled,
        Division::WomenRx,
        Division::WomenScaled,
    ];

    pub fn gender(&self) -> Gender {
        match self {
            Division::MenRx | Division::MenScaled => Gender::Men,
            Division::WomenRx | Division::WomenScaled => Gender::Women,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Division::MenRx | Division::WomenRx => Tier::Rx,
            Division::MenScaled | Division::WomenScaled => Tier::Scaled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::MenRx => "men_rx",
            Division::MenScaled => "men_scaled",
            Division::WomenRx => "women_rx",
            Division::WomenScaled => "women_scaled",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men_rx" => Ok(Division::MenRx),
            "men_scaled" => Ok(Division::MenScaled),
            "women_rx" => Ok(Division::WomenRx),
            "women_scaled" => Ok(Division::WomenScaled),
            other => Err(EngineError::UnknownDivision(other.to_string())),
        }
    }
}

/// Coarser grouping used to filter a leaderboard: a single division, one
/// gender across tiers, one tier across genders, or everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFilter {
    All,
    Division(Division),
    Gender(Gender),
    Tier(Tier),
}

impl TrackFilter {
    pub fn matches(&self, division: Division) -> bool {
        match self {
            TrackFilter::All => true,
            TrackFilter::Division(d) => *d == division,
            TrackFilter::Gender(g) => *g == division.gender(),
            TrackFilter::Tier(t) => *t == division.tier(),
        }
    }
}

impl FromStr for TrackFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TrackFilter::All),
            "men" => Ok(TrackFilter::Gender(Gender::Men)),
            "women" => Ok(TrackFilter::Gender(Gender::Women)),
            "rx" => Ok(TrackFilter::Tier(Tier::Rx)),
            "scaled" => Ok(TrackFilter::Tier(Tier::Scaled)),
            other => Division::from_str(other)
                .map(TrackFilter::Division)
                .map_err(|_| EngineError::UnknownTrack(other.to_string())),
        }
    }
}
