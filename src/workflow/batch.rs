//! Sequential batch processing of resumes against one job description

use crate::config::Config;
use crate::error::{Result, ScreenerError};
use crate::input::Normalizer;
use crate::llm::client::TextCompletion;
use crate::llm::extractor::{KeywordExtractor, LocationExtractor, OutreachGenerator};
use crate::processing::contact::ContactExtractor;
use crate::processing::keywords::KeywordSet;
use crate::processing::location::LocationRules;
use crate::processing::scoring::{weighted_score, PriorityTiers};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// The uploaded job description after normalization and keyword extraction.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub file_name: String,
    pub text: String,
    pub keywords: KeywordSet,
}

/// One resume queued for processing, with the reviewer-supplied
/// availability in days (1–365).
#[derive(Debug, Clone)]
pub struct ResumeInput {
    pub path: PathBuf,
    pub days_available: u16,
}

impl ResumeInput {
    pub fn new(path: PathBuf, days_available: u16) -> Result<Self> {
        if !(1..=365).contains(&days_available) {
            return Err(ScreenerError::InvalidInput(format!(
                "Days available must be between 1 and 365, got {}",
                days_available
            )));
        }
        Ok(Self {
            path,
            days_available,
        })
    }
}

/// Per-resume processing result. `location_score` is the only field that
/// may change after creation, through the manual review step.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRecord {
    pub resume_file: String,
    pub job_description: String,
    pub location: String,
    pub location_score: f32,
    pub email_id: String,
    pub contact_number: String,
    pub days_available: u16,
    pub batch: String,
    pub cover_letter: String,
    pub outreach_email: String,
    pub keywords: KeywordSet,
    pub weighted_score: u32,
}

impl CandidateRecord {
    pub fn set_location_score(&mut self, score: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&score) {
            return Err(ScreenerError::InvalidInput(format!(
                "Location score must be between 0.0 and 1.0, got {}",
                score
            )));
        }
        self.location_score = score;
        Ok(())
    }
}

/// Runs one batch: each resume is fully processed before the next begins,
/// and the first failure aborts the run. Converted artifacts live in the
/// normalizer's scoped temp directory for exactly this invocation.
pub struct BatchProcessor<'a, C: TextCompletion> {
    client: &'a C,
    contacts: ContactExtractor,
    location_rules: LocationRules,
    batch_label: String,
}

impl<'a, C: TextCompletion> BatchProcessor<'a, C> {
    pub fn new(client: &'a C, config: &Config) -> Self {
        Self {
            client,
            contacts: ContactExtractor::new(),
            location_rules: LocationRules::new(&config.location),
            batch_label: config.output.batch_label.clone(),
        }
    }

    pub async fn run(
        &self,
        resumes: &[ResumeInput],
        jd: &JobDescription,
        tiers: &PriorityTiers,
    ) -> Result<Vec<CandidateRecord>> {
        let normalizer = Normalizer::new()?;
        let keyword_extractor = KeywordExtractor::new(self.client);
        let location_extractor = LocationExtractor::new(self.client);
        let outreach = OutreachGenerator::new(self.client);

        let mut records = Vec::with_capacity(resumes.len());

        for resume in resumes {
            let file_name = resume
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| resume.path.display().to_string());
            info!("Processing resume: {}", file_name);

            let text = normalizer.normalize(&resume.path).await?;
            let text = text.as_str();

            let email_id = self.contacts.extract_email(text);
            let contact_number = self.contacts.extract_contact_number(text);

            let keywords = keyword_extractor.extract(text).await?.into_keywords();
            let location = location_extractor.extract(text).await?;
            let location_score = self.location_rules.score(&location);
            let score = weighted_score(&keywords, tiers);

            let cover_letter = outreach.generate_cover_letter(text, &jd.text).await?;
            let outreach_email = outreach.generate_outreach_email(text, &jd.text).await?;

            records.push(CandidateRecord {
                resume_file: file_name,
                job_description: jd.file_name.clone(),
                location,
                location_score,
                email_id,
                contact_number,
                days_available: resume.days_available,
                batch: self.batch_label.clone(),
                cover_letter,
                outreach_email,
                keywords,
                weighted_score: score,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_available_bounds() {
        assert!(ResumeInput::new(PathBuf::from("a.pdf"), 0).is_err());
        assert!(ResumeInput::new(PathBuf::from("a.pdf"), 366).is_err());
        assert!(ResumeInput::new(PathBuf::from("a.pdf"), 1).is_ok());
        assert!(ResumeInput::new(PathBuf::from("a.pdf"), 365).is_ok());
    }

    #[test]
    fn test_location_score_override_bounds() {
        let mut record = CandidateRecord {
            resume_file: "a.pdf".to_string(),
            job_description: "jd.pdf".to_string(),
            location: "Pune".to_string(),
            location_score: 0.0,
            email_id: String::new(),
            contact_number: String::new(),
            days_available: 1,
            batch: "Batch 1".to_string(),
            cover_letter: String::new(),
            outreach_email: String::new(),
            keywords: KeywordSet::from_phrases(Vec::<String>::new()),
            weighted_score: 0,
        };

        assert!(record.set_location_score(0.5).is_ok());
        assert_eq!(record.location_score, 0.5);
        assert!(record.set_location_score(1.5).is_err());
        assert!(record.set_location_score(-0.1).is_err());
        assert_eq!(record.location_score, 0.5);
    }
}
