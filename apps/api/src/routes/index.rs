use axum::response::Html;

const INDEX_PAGE: &str = r#"<html>
    <head>
        <title>Smart ATS Resume Analyzer API</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                max-width: 800px;
                margin: 0 auto;
                padding: 20px;
                line-height: 1.6;
            }
            h1 {
                color: #2a5298;
            }
            .endpoint {
                background: #f5f5f5;
                padding: 15px;
                border-radius: 5px;
                margin-bottom: 20px;
            }
            code {
                background: #e0e0e0;
                padding: 2px 5px;
                border-radius: 3px;
            }
        </style>
    </head>
    <body>
        <h1>Smart ATS Resume Analyzer API</h1>
        <p>This API provides resume analysis against job descriptions.</p>

        <div class="endpoint">
            <h2>POST /analyze</h2>
            <p>Upload a resume PDF (<code>resume</code>) and provide a job link (<code>job_link</code>) to get analysis.</p>
        </div>

        <div class="endpoint">
            <h2>POST /generate-email</h2>
            <p>Generate a job application email from <code>resume_content</code> and <code>job_content</code>.</p>
        </div>

        <p>Service status is available at <code>/health</code>.</p>
    </body>
</html>"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
