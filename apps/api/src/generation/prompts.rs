// All LLM prompt constants for the Generation module.
// Filled with `llm_client::prompts::render`.

/// ATS match analysis prompt.
/// Replace: {resume_content}, {job_content}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"###Role Definition:
    Act as a highly skilled ATS (Application Tracking System) professional with expertise in evaluating resumes
    across various tech fields, including software engineering, data science, data analysis, big data engineering, web development, and app development.
    Compare resumes against job descriptions, ensuring high precision and actionable insights.

###Task Objective:
    Your task is to provide a comprehensive evaluation of a resume based on the job content,
    web-scraped from the provided job link. The aim is to assist candidates in optimizing their resumes for a
    competitive job market by identifying gaps and offering targeted improvement suggestions.

###Response Format (Use HTML with CSS styling):
    <div style='text-align: center; padding: 20px;'>
        <h1 style='font-size: 48px; color: white; margin-bottom: 10px;'>Match Percentage: [Insert calculated percentage]%</h1>
    </div>

    <div style='background-image: linear-gradient(to top, #1e3c72 0%, #1e3c72 1%, #2a5298 100%); padding: 20px; margin: 10px 0; border-radius: 10px;'>
        <h2 style='color: white; border-bottom: 2px solid #0066cc;'>Reasons for Match Percentage</h2>
        - Strengths:
        [List specific strengths]
        - Gaps:
        [List gaps in responsibilities/skills]
        - Alignment:
        [Explain alignment with requirements]
        - Missing Elements:
        [Highlight important missing keywords]
    </div>

    <div style='background-image: linear-gradient(to top, #1e3c72 0%, #1e3c72 1%, #2a5298 100%); padding: 20px; margin: 10px 0; border-radius: 10px;'>
        <h2 style='color: white; border-bottom: 2px solid #0066cc;'>Missing Keywords</h2>
        [Detailed list of missing/weak keywords]
    </div>

    <div style='background-image: linear-gradient(to top, #1e3c72 0%, #1e3c72 1%, #2a5298 100%); padding: 20px; margin: 10px 0; border-radius: 10px;'>
        <h2 style='color: white; border-bottom: 2px solid #0066cc;'>Improvement Suggestions</h2>
        [Five actionable tips for improvement]

        <h3 style='margin-top: 15px;'>Recommended Certifications:</h3>
        [Coursera and Udemy certification recommendations with links]
    </div>

Resume Content: {resume_content}
Content scraped from Job Application Link: {job_content}"#;

/// Application email prompt.
/// Replace: {job_content}, {resume_content}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"### JOB CONTENT:
{job_content}

### USER RESUME:
{resume_content}

### INSTRUCTION:
Create a personalized job application email using the above details.
Include:
1. A formal greeting
2. A brief introduction about the candidate
3. Explanation of why the user is interested in the job
4. Value proposition and how the user's skills align with the job
5. Call to action (interview invitation)
6. Polite closing with contact details

Ensure the email maintains a professional and concise tone."#;
