//! Smoke-tests a running server: uploads a PDF, then asks a question about it.
//!
//! Usage: `cargo run -p qa_system --example client -- path/to/file.pdf "your question"`

use reqwest::multipart::{Form, Part};
use reqwest::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let pdf_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: client <file.pdf> [question]"))?;
    let question = args
        .next()
        .unwrap_or_else(|| "What is this document about?".to_string());

    let client = Client::new();
    let base_url = "http://127.0.0.1:8000";

    println!("📄 Upload:");
    let bytes = tokio::fs::read(&pdf_path).await?;
    let filename = std::path::Path::new(&pdf_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.pdf".to_string());
    let form = Form::new().part(
        "file",
        Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/pdf")?,
    );

    let upload_response = client
        .post(format!("{}/upload/", base_url))
        .multipart(form)
        .send()
        .await?;

    println!("Status: {}", upload_response.status());
    let upload_json: serde_json::Value = upload_response.json().await?;
    println!("Questions: {}", serde_json::to_string_pretty(&upload_json["questions"])?);

    let content = upload_json["content"].as_str().unwrap_or_default().to_string();

    println!("\n🔍 Query:");
    let query_response = client
        .post(format!("{}/query/", base_url))
        .query(&[("query", question.as_str()), ("content", content.as_str())])
        .send()
        .await?;

    println!("Status: {}", query_response.status());
    let query_json: serde_json::Value = query_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&query_json)?);

    Ok(())
}
