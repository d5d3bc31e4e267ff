use serde::{Deserialize, Serialize};
use std::fmt;

pub const RANK_COLUMN: &str = "Overall rank";
pub const COUNTRY_COLUMN: &str = "Country or region";

/// A selectable numeric column; its serde name is the CSV header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Metric {
    #[default]
    #[serde(rename = "Score")]
    Score,
    #[serde(rename = "GDP per capita")]
    GdpPerCapita,
    #[serde(rename = "Social support")]
    SocialSupport,
    #[serde(rename = "Healthy life expectancy")]
    HealthyLifeExpectancy,
    #[serde(rename = "Freedom to make life choices")]
    Freedom,
    #[serde(rename = "Generosity")]
    Generosity,
    #[serde(rename = "Perceptions of corruption")]
    Corruption,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Score,
        Metric::GdpPerCapita,
        Metric::SocialSupport,
        Metric::HealthyLifeExpectancy,
        Metric::Freedom,
        Metric::Generosity,
        Metric::Corruption,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Metric::Score => "Score",
            Metric::GdpPerCapita => "GDP per capita",
            Metric::SocialSupport => "Social support",
            Metric::HealthyLifeExpectancy => "Healthy life expectancy",
            Metric::Freedom => "Freedom to make life choices",
            Metric::Generosity => "Generosity",
            Metric::Corruption => "Perceptions of corruption",
        }
    }

    /// Label shown in the primary metric selector.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Score => "Happiness Score",
            Metric::GdpPerCapita => "GDP per capita",
            Metric::SocialSupport => "Social Support",
            Metric::HealthyLifeExpectancy => "Healthy Life Expectancy",
            Metric::Freedom => "Freedom to Make Life Choices",
            Metric::Generosity => "Generosity",
            Metric::Corruption => "Perceptions of Corruption",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Overall rank")]
    pub rank: u32,
    #[serde(rename = "Country or region")]
    pub country: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "GDP per capita")]
    pub gdp_per_capita: f64,
    #[serde(rename = "Social support")]
    pub social_support: f64,
    #[serde(rename = "Healthy life expectancy")]
    pub healthy_life_expectancy: f64,
    #[serde(rename = "Freedom to make life choices")]
    pub freedom: f64,
    #[serde(rename = "Generosity")]
    pub generosity: f64,
    #[serde(rename = "Perceptions of corruption")]
    pub corruption: f64,
}

impl Row {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Score => self.score,
            Metric::GdpPerCapita => self.gdp_per_capita,
            Metric::SocialSupport => self.social_support,
            Metric::HealthyLifeExpectancy => self.healthy_life_expectancy,
            Metric::Freedom => self.freedom,
            Metric::Generosity => self.generosity,
            Metric::Corruption => self.corruption,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricOption {
    pub value: Metric,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub default: Metric,
    pub metrics: Vec<MetricOption>,
    pub countries: usize,
}
