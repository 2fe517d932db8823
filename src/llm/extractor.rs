//! Model-backed extraction and generation over a text-completion client

use crate::error::Result;
use crate::llm::client::TextCompletion;
use crate::llm::prompts::PromptTemplates;
use crate::processing::keywords::{parse_keyword_response, ParsedKeywords};
use log::{debug, info};

/// Keyword extraction against the strict-JSON prompt contract. Transport
/// failures surface; malformed replies degrade inside the parser.
pub struct KeywordExtractor<'a, C: TextCompletion> {
    client: &'a C,
    templates: PromptTemplates,
}

impl<'a, C: TextCompletion> KeywordExtractor<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            templates: PromptTemplates,
        }
    }

    pub async fn extract(&self, text: &str) -> Result<ParsedKeywords> {
        let prompt = self.templates.keyword_extraction(text);
        let raw = self.client.complete(&prompt).await?;
        let parsed = parse_keyword_response(&raw);
        if !parsed.is_structured() {
            info!("Model reply was not valid JSON; fell back to comma-splitting");
        }
        debug!("Extracted {} keywords", parsed.keywords().len());
        Ok(parsed)
    }
}

/// Location extraction: the trimmed model reply is taken verbatim.
pub struct LocationExtractor<'a, C: TextCompletion> {
    client: &'a C,
    templates: PromptTemplates,
}

impl<'a, C: TextCompletion> LocationExtractor<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            templates: PromptTemplates,
        }
    }

    pub async fn extract(&self, text: &str) -> Result<String> {
        let prompt = self.templates.location_extraction(text);
        let raw = self.client.complete(&prompt).await?;
        Ok(raw.trim().to_string())
    }
}

/// Cover-letter and interview-invitation drafting. Two independent,
/// stateless calls; no retries beyond what the client itself performs.
pub struct OutreachGenerator<'a, C: TextCompletion> {
    client: &'a C,
    templates: PromptTemplates,
}

impl<'a, C: TextCompletion> OutreachGenerator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            templates: PromptTemplates,
        }
    }

    pub async fn generate_cover_letter(&self, resume: &str, jd: &str) -> Result<String> {
        let prompt = self.templates.cover_letter(resume, jd);
        self.client.complete(&prompt).await
    }

    pub async fn generate_outreach_email(&self, resume: &str, jd: &str) -> Result<String> {
        let prompt = self.templates.outreach_email(resume, jd);
        self.client.complete(&prompt).await
    }
}
