//! Location preference scoring
//!
//! A fixed allow-list of regional substrings, not a geography model. The
//! rule table lives in configuration so the preferred regions can change
//! without touching this code.

use crate::config::{LocationConfig, RegionRule};

pub struct LocationRules {
    rules: Vec<RegionRule>,
}

impl LocationRules {
    pub fn new(config: &LocationConfig) -> Self {
        let rules = config
            .preferred_regions
            .iter()
            .map(|rule| RegionRule {
                substring: rule.substring.to_lowercase(),
                score: rule.score,
            })
            .collect();
        Self { rules }
    }

    /// Case-insensitive substring check against the rule table. The first
    /// matching rule wins; no match scores 0.0.
    pub fn score(&self, location: &str) -> f32 {
        let location = location.to_lowercase();
        self.rules
            .iter()
            .find(|rule| location.contains(&rule.substring))
            .map(|rule| rule.score)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn default_rules() -> LocationRules {
        LocationRules::new(&Config::default().location)
    }

    #[test]
    fn test_preferred_region_scores() {
        let rules = default_rules();
        assert_eq!(rules.score("Hyderabad, Telangana"), 0.1);
        assert_eq!(rules.score("Vijayawada, Andhra Pradesh"), 0.1);
    }

    #[test]
    fn test_other_region_scores_zero() {
        let rules = default_rules();
        assert_eq!(rules.score("Mumbai, Maharashtra"), 0.0);
        assert_eq!(rules.score(""), 0.0);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rules = default_rules();
        assert_eq!(rules.score("TELANGANA"), 0.1);
    }

    #[test]
    fn test_custom_rule_table() {
        let config = LocationConfig {
            preferred_regions: vec![RegionRule {
                substring: "Bavaria".to_string(),
                score: 0.25,
            }],
        };
        let rules = LocationRules::new(&config);
        assert_eq!(rules.score("Munich, bavaria"), 0.25);
        assert_eq!(rules.score("Telangana"), 0.0);
    }
}
