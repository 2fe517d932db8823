//! Priority tiers and weighted match scoring
//!
//! Job-description keywords are partitioned into High, Medium, and Low
//! priority through a two-stage elimination: the reviewer picks High from
//! the full set, then Medium from what remains, and the remainder is Low.
//! The staged builder types make it impossible to offer Medium selection
//! before High is confirmed or to pick a keyword into two tiers.

use crate::error::{Result, ScreenerError};
use crate::processing::keywords::KeywordSet;

/// Stage one: High-priority selection over the full JD keyword set.
pub struct HighSelection {
    choices: KeywordSet,
}

/// Stage two: Medium-priority selection over the keywords not taken as High.
pub struct MediumSelection {
    high: KeywordSet,
    choices: KeywordSet,
}

/// Confirmed partition. The three tiers are pairwise disjoint and their
/// union equals the full job-description keyword set.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityTiers {
    high: KeywordSet,
    medium: KeywordSet,
    low: KeywordSet,
}

impl HighSelection {
    pub fn new(jd_keywords: KeywordSet) -> Self {
        Self {
            choices: jd_keywords,
        }
    }

    /// The keywords currently on offer.
    pub fn choices(&self) -> &KeywordSet {
        &self.choices
    }

    pub fn select_high<I, S>(self, picks: I) -> Result<MediumSelection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let high = validated_picks(&self.choices, picks)?;
        let choices = difference(&self.choices, &high);
        Ok(MediumSelection { high, choices })
    }
}

impl MediumSelection {
    /// High picks are excluded from this choice set.
    pub fn choices(&self) -> &KeywordSet {
        &self.choices
    }

    pub fn select_medium<I, S>(self, picks: I) -> Result<PriorityTiers>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let medium = validated_picks(&self.choices, picks)?;
        let low = difference(&self.choices, &medium);
        Ok(PriorityTiers {
            high: self.high,
            medium,
            low,
        })
    }
}

impl PriorityTiers {
    pub fn high(&self) -> &KeywordSet {
        &self.high
    }

    pub fn medium(&self) -> &KeywordSet {
        &self.medium
    }

    pub fn low(&self) -> &KeywordSet {
        &self.low
    }
}

fn validated_picks<I, S>(choices: &KeywordSet, picks: I) -> Result<KeywordSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let picked = KeywordSet::from_phrases(picks);
    for keyword in picked.iter() {
        if !choices.contains(keyword) {
            return Err(ScreenerError::Workflow(format!(
                "'{}' is not in the current choice set",
                keyword
            )));
        }
    }
    Ok(picked)
}

fn difference(full: &KeywordSet, taken: &KeywordSet) -> KeywordSet {
    KeywordSet::from_phrases(full.iter().filter(|k| !taken.contains(k)))
}

/// Weighted overlap of resume keywords against the confirmed tiers:
/// 3 per High hit, 2 per Medium, 1 per Low. Exact case-insensitive set
/// intersection; no partial or fuzzy credit.
pub fn weighted_score(resume_keywords: &KeywordSet, tiers: &PriorityTiers) -> u32 {
    let hits = |tier: &KeywordSet| {
        resume_keywords
            .iter()
            .filter(|k| tier.contains(k))
            .count() as u32
    };

    3 * hits(&tiers.high) + 2 * hits(&tiers.medium) + hits(&tiers.low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd_set() -> KeywordSet {
        KeywordSet::from_phrases(["python", "sql", "machine learning"])
    }

    fn confirmed_tiers() -> PriorityTiers {
        HighSelection::new(jd_set())
            .select_high(["python"])
            .unwrap()
            .select_medium(["sql"])
            .unwrap()
    }

    #[test]
    fn test_two_stage_partition() {
        let tiers = confirmed_tiers();
        assert_eq!(tiers.high().as_slice(), &["python"]);
        assert_eq!(tiers.medium().as_slice(), &["sql"]);
        assert_eq!(tiers.low().as_slice(), &["machine learning"]);
    }

    #[test]
    fn test_medium_choices_exclude_high_picks() {
        let medium_stage = HighSelection::new(jd_set()).select_high(["python"]).unwrap();
        assert!(!medium_stage.choices().contains("python"));
        assert!(medium_stage.choices().contains("sql"));
    }

    #[test]
    fn test_partition_invariant() {
        let tiers = confirmed_tiers();
        let full = jd_set();

        for keyword in full.iter() {
            let memberships = [
                tiers.high().contains(keyword),
                tiers.medium().contains(keyword),
                tiers.low().contains(keyword),
            ]
            .iter()
            .filter(|&&m| m)
            .count();
            assert_eq!(memberships, 1, "'{}' must be in exactly one tier", keyword);
        }

        let total = tiers.high().len() + tiers.medium().len() + tiers.low().len();
        assert_eq!(total, full.len());
    }

    #[test]
    fn test_pick_outside_choice_set_rejected() {
        let result = HighSelection::new(jd_set()).select_high(["golang"]);
        assert!(matches!(result, Err(ScreenerError::Workflow(_))));
    }

    #[test]
    fn test_pick_already_taken_as_high_rejected_for_medium() {
        let medium_stage = HighSelection::new(jd_set()).select_high(["python"]).unwrap();
        let result = medium_stage.select_medium(["python"]);
        assert!(matches!(result, Err(ScreenerError::Workflow(_))));
    }

    #[test]
    fn test_weighted_score_end_to_end() {
        let tiers = confirmed_tiers();
        let resume = KeywordSet::from_phrases(["python", "sql", "java"]);
        assert_eq!(weighted_score(&resume, &tiers), 5);
    }

    #[test]
    fn test_weighted_score_monotonic_per_tier() {
        let tiers = confirmed_tiers();

        let base = KeywordSet::from_phrases(["java"]);
        let with_high = KeywordSet::from_phrases(["java", "python"]);
        let with_medium = KeywordSet::from_phrases(["java", "sql"]);
        let with_low = KeywordSet::from_phrases(["java", "machine learning"]);

        let baseline = weighted_score(&base, &tiers);
        assert_eq!(weighted_score(&with_high, &tiers), baseline + 3);
        assert_eq!(weighted_score(&with_medium, &tiers), baseline + 2);
        assert_eq!(weighted_score(&with_low, &tiers), baseline + 1);
    }

    #[test]
    fn test_untiered_keyword_adds_nothing() {
        let tiers = confirmed_tiers();
        let resume = KeywordSet::from_phrases(["kubernetes"]);
        assert_eq!(weighted_score(&resume, &tiers), 0);
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let tiers = HighSelection::new(KeywordSet::from_phrases(["Python"]))
            .select_high(["PYTHON"])
            .unwrap()
            .select_medium(Vec::<String>::new())
            .unwrap();
        let resume = KeywordSet::from_phrases([" Python "]);
        assert_eq!(weighted_score(&resume, &tiers), 3);
    }
}
