//! Fixed instruction templates for the text-completion service

/// Prompt builders for the four completion calls the pipeline makes.
/// The wording is the interface: keyword extraction relies on the strict
/// JSON instruction, and the cover letter relies on the bare-contact-line
/// formatting contract, neither is post-processed.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates;

impl PromptTemplates {
    pub fn keyword_extraction(&self, text: &str) -> String {
        format!(
            r#"You are an expert at extracting short, self-explanatory keywords from documents.

Extract a comma-separated list of contextually meaningful and **self-explanatory** keywords from the following text.
Each keyword should be as short as possible but fully clear in meaning and context (e.g. "bachelor degree in computer science", "master degree in physics", "certification in data science", "Python", "Machine Learning", "AWS").
Expand all short forms and abbreviations to their full forms.
Avoid unnecessary length, full sentences, or vague terms.

Return ONLY the JSON below (no extra words):

{{
  "keywords": [ ... ]
}}

TEXT:
{text}
"#
        )
    }

    pub fn location_extraction(&self, text: &str) -> String {
        format!(
            "Extract the current city or state location of the candidate from the following resume text. Only return the location, nothing else.\n\n{}",
            text
        )
    }

    pub fn cover_letter(&self, resume: &str, job_description: &str) -> String {
        let jd_section = if job_description.trim().is_empty() {
            "There is no job description provided.".to_string()
        } else {
            format!(
                "The job description is:\n----------------\n{}\n----------------",
                job_description
            )
        };

        format!(
            r#"You are a helpful assistant that writes professional cover letters.

Write a tailored cover letter using the following resume (in markdown format):
----------------
{resume}
----------------

{jd_section}
Please take the help of the resume and fill the details of the cover letter like,

[Your Name]
[Your Address]
[Your Phone Number]
[Your Email Address]

After filling the above details do not put square brackets around above mentioned things.

Following is the not expected output example for the above instructions:

[Riya Dubey]
[Laxmi Nagar, Delhi]
[9822001387]
[riya@gmail.com]

Following is the expected output example for the above instructions:

Riya Dubey
Laxmi Nagar, Delhi
9822001387
riya@gmail.com

Make it concise, relevant, and formal in tone. Begin with a compelling intro, and end with a thank you and a call to action."#
        )
    }

    pub fn outreach_email(&self, resume: &str, job_description: &str) -> String {
        format!(
            r#"You are an HR professional writing an email to a candidate. The candidate's resume is below, and so is the job description. Invite the candidate for a discussion/interview, mention why you are interested, and tell a few good points about the company. Write a professional email.
Resume:
{resume}
Job Description:
{job_description}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_prompt_contains_json_contract() {
        let templates = PromptTemplates;
        let prompt = templates.keyword_extraction("Python developer in Pune");

        assert!(prompt.contains(r#""keywords": [ ... ]"#));
        assert!(prompt.contains("Return ONLY the JSON"));
        assert!(prompt.contains("Python developer in Pune"));
    }

    #[test]
    fn test_location_prompt_includes_text() {
        let templates = PromptTemplates;
        let prompt = templates.location_extraction("lives in Hyderabad");
        assert!(prompt.contains("Only return the location"));
        assert!(prompt.ends_with("lives in Hyderabad"));
    }

    #[test]
    fn test_cover_letter_no_bracket_contract() {
        let templates = PromptTemplates;
        let prompt = templates.cover_letter("resume text", "jd text");

        assert!(prompt.contains("do not put square brackets"));
        assert!(prompt.contains("not expected output example"));
        assert!(prompt.contains("expected output example"));
        assert!(prompt.contains("jd text"));
    }

    #[test]
    fn test_cover_letter_handles_missing_jd() {
        let templates = PromptTemplates;
        let prompt = templates.cover_letter("resume text", "   ");
        assert!(prompt.contains("There is no job description provided."));
    }

    #[test]
    fn test_outreach_email_prompt() {
        let templates = PromptTemplates;
        let prompt = templates.outreach_email("resume body", "jd body");
        assert!(prompt.contains("Invite the candidate"));
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("jd body"));
    }
}
