//! Integration tests for the resume screener

use resume_screener::config::Config;
use resume_screener::error::Result;
use resume_screener::input::Normalizer;
use resume_screener::llm::extractor::KeywordExtractor;
use resume_screener::llm::TextCompletion;
use resume_screener::workflow::batch::{BatchProcessor, JobDescription, ResumeInput};
use resume_screener::workflow::WorkflowState;
use std::path::{Path, PathBuf};

/// Offline completion client that answers by prompt shape: the keyword
/// prompt gets a JSON reply keyed off which document is embedded in it,
/// the location prompt gets a city, and the outreach prompts get drafts.
struct RoutedFakeClient;

impl TextCompletion for RoutedFakeClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if prompt.contains("Return ONLY the JSON") {
            if prompt.contains("Asha Rao") {
                return Ok(r#"{"keywords": ["Python", "SQL", "Java"]}"#.to_string());
            }
            if prompt.contains("Vikram Shah") {
                return Ok(r#"{"keywords": ["Python", "Go", "Docker"]}"#.to_string());
            }
            return Ok(r#"{"keywords": ["Python", "SQL", "Machine Learning"]}"#.to_string());
        }
        if prompt.contains("Only return the location") {
            if prompt.contains("Asha Rao") {
                return Ok("Hyderabad, Telangana".to_string());
            }
            return Ok("Mumbai, Maharashtra".to_string());
        }
        if prompt.contains("cover letters") {
            return Ok("Dear hiring manager, I am excited to apply.".to_string());
        }
        Ok("Dear candidate, we would like to invite you for an interview.".to_string())
    }
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

async fn load_jd(client: &RoutedFakeClient) -> JobDescription {
    let normalizer = Normalizer::new().unwrap();
    let text = normalizer
        .normalize(&fixture("job_description.md"))
        .await
        .unwrap()
        .into_string();
    let keywords = KeywordExtractor::new(client)
        .extract(&text)
        .await
        .unwrap()
        .into_keywords();

    JobDescription {
        file_name: "job_description.md".to_string(),
        text,
        keywords,
    }
}

#[tokio::test]
async fn test_normalization_flattens_fixture_tables() {
    let normalizer = Normalizer::new().unwrap();
    let text = normalizer
        .normalize(&fixture("sample_resume.md"))
        .await
        .unwrap();

    assert!(text.as_str().contains("Skill, Years"));
    assert!(text.as_str().contains("Python, 5"));
    assert!(!text.as_str().contains('|'));
}

#[tokio::test]
async fn test_unsupported_upload_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("resume.rtf");
    std::fs::write(&path, "not supported").unwrap();

    let normalizer = Normalizer::new().unwrap();
    assert!(normalizer.normalize(&path).await.is_err());
}

#[tokio::test]
async fn test_full_screening_workflow() {
    let client = RoutedFakeClient;
    let config = Config::default();
    let jd = load_jd(&client).await;

    assert_eq!(
        jd.keywords.as_slice(),
        &["machine learning", "python", "sql"]
    );

    let state = WorkflowState::new()
        .upload_jd(jd)
        .unwrap()
        .confirm_high(["python"])
        .unwrap()
        .confirm_medium(["sql"])
        .unwrap()
        .start_batch()
        .unwrap();

    let resumes = vec![
        ResumeInput::new(fixture("second_resume.md"), 30).unwrap(),
        ResumeInput::new(fixture("sample_resume.md"), 15).unwrap(),
    ];

    let records = match &state {
        WorkflowState::BatchProcessing { jd, tiers } => {
            let processor = BatchProcessor::new(&client, &config);
            processor.run(&resumes, jd, tiers).await.unwrap()
        }
        _ => unreachable!(),
    };

    // Asha: python (high, 3) + sql (medium, 2) = 5. Vikram: python = 3.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].resume_file, "second_resume.md");
    assert_eq!(records[0].weighted_score, 3);
    assert_eq!(records[1].resume_file, "sample_resume.md");
    assert_eq!(records[1].weighted_score, 5);

    // Contact hints and the location rule only fire where they should.
    assert_eq!(records[1].email_id, "asha.rao@example.com");
    assert_eq!(records[1].contact_number, "+91 98220-01387");
    assert_eq!(records[1].location_score, 0.1);
    assert_eq!(records[0].email_id, "");
    assert_eq!(records[0].location_score, 0.0);

    let state = state.complete_batch(records).unwrap();
    let state = state.finalize(&[(0, 0.3)]).unwrap();

    let ranked = match state {
        WorkflowState::Finalized { ranked } => ranked,
        _ => unreachable!(),
    };

    // Higher weighted score ranks first regardless of input order.
    let files: Vec<&str> = ranked
        .records()
        .iter()
        .map(|r| r.resume_file.as_str())
        .collect();
    assert_eq!(files, vec!["sample_resume.md", "second_resume.md"]);

    // The override applied to the record that was at index 0 pre-ranking.
    let vikram = ranked
        .records()
        .iter()
        .find(|r| r.resume_file == "second_resume.md")
        .unwrap();
    assert_eq!(vikram.location_score, 0.3);

    // Export carries the screening-sheet columns.
    let mut buffer = Vec::new();
    ranked.write_csv(&mut buffer).unwrap();
    let csv = String::from_utf8(buffer).unwrap();
    assert!(csv.starts_with("Resume File,Job Description,"));
    assert!(csv.contains("asha.rao@example.com"));
    assert!(csv.contains("\"java, python, sql\""));
}

#[tokio::test]
async fn test_selection_order_is_enforced() {
    let client = RoutedFakeClient;
    let jd = load_jd(&client).await;

    let state = WorkflowState::new().upload_jd(jd).unwrap();
    assert!(state.confirm_medium(["sql"]).is_err());
}

#[tokio::test]
async fn test_fallback_keyword_path_feeds_scoring() {
    struct PlainTextClient;
    impl TextCompletion for PlainTextClient {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("Python, SQL, Excel".to_string())
        }
    }

    let extractor = KeywordExtractor::new(&PlainTextClient);
    let parsed = extractor.extract("any resume text").await.unwrap();
    assert!(!parsed.is_structured());
    assert_eq!(
        parsed.into_keywords().as_slice(),
        &["excel", "python", "sql"]
    );
}
