//! Ranked results and spreadsheet export

use crate::error::Result;
use crate::workflow::batch::CandidateRecord;
use std::io::Write;
use std::path::Path;

/// Candidate records ordered by weighted score, best first. Derived view;
/// rebuilt whenever the location-review step completes.
#[derive(Debug)]
pub struct RankedResultSet {
    records: Vec<CandidateRecord>,
}

/// Export column order matches the original screening sheet; the manually
/// reviewed location score feeds ranking decisions but is not a column.
const HEADERS: [&str; 11] = [
    "Resume File",
    "Job Description",
    "Candidate Location",
    "Cover Letter",
    "Email",
    "email_id",
    "contact_number",
    "Days Available",
    "Batch",
    "Resume_Keywords",
    "weighted_score",
];

impl RankedResultSet {
    pub fn rank(mut records: Vec<CandidateRecord>) -> Self {
        records.sort_by(|a, b| b.weighted_score.cmp(&a.weighted_score));
        Self { records }
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADERS)?;

        for record in &self.records {
            csv_writer.write_record([
                record.resume_file.as_str(),
                record.job_description.as_str(),
                record.location.as_str(),
                record.cover_letter.as_str(),
                record.outreach_email.as_str(),
                record.email_id.as_str(),
                record.contact_number.as_str(),
                &record.days_available.to_string(),
                record.batch.as_str(),
                &record.keywords.joined(),
                &record.weighted_score.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}
