// LLM prompt constants for the Job module.

/// Job posting distillation prompt. Replace `{page_data}` before sending.
pub const JOB_EXTRACTION_PROMPT: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}
### INSTRUCTION:
Extract the following from the scraped text:
- Company Details (e.g., Name)
- Job Title and Role
- Job Description
- Skills and Competencies
- Qualifications and Experience
and any other important data"#;
