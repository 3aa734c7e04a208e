//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `arthavivek` CLI

use crate::ingest::IngestReport;
use crate::models::UpdateArticle;
use crate::rag::AdviceResult;
use crate::AppConfig;

/// Shown under every generated answer
pub const DISCLAIMER: &str =
    "Disclaimer: This is for educational purposes only. Please consult a SEBI registered financial advisor.";

/// Safely truncate a string at character boundary (not byte boundary)
///
/// Appends "..." when the string was cut.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print an advice result: answer, translation, disclaimer, then related links
pub fn print_advice(advice: &AdviceResult) {
    println!("{}", advice.answer);

    if !advice.status.is_generated() {
        return;
    }

    if let Some(translation) = &advice.translation {
        println!();
        println!("🌐 {}:", translation.language);
        println!("{}", translation.text);
    }

    println!();
    println!("⚠️  {DISCLAIMER}");

    if !advice.videos.is_empty() {
        println!();
        println!("🎬 Related videos:");
        for video in &advice.videos {
            println!("  - {video}");
        }
    }

    if !advice.blogs.is_empty() {
        println!();
        println!("📖 Further reading:");
        for blog in &advice.blogs {
            println!("  - {blog}");
        }
    }
}

/// Print knowledge hub entries
pub fn print_updates(updates: &[UpdateArticle]) {
    if updates.is_empty() {
        print_info("No updates available right now.");
        return;
    }

    println!("💡 Knowledge Hub ({} updates):", updates.len());
    for update in updates {
        println!();
        println!(
            "📰 {} ({}, {})",
            update.title,
            update.source,
            update.date_published.format("%d %b %Y")
        );
        println!("   {}", truncate_str(&update.summary, 280));
        println!("   🔗 {}", update.original_link);
    }
}

pub fn print_ingest_report(what: &str, report: &IngestReport) {
    print_success(&format!(
        "{what}: {} inserted, {} skipped, {} failed",
        report.inserted, report.skipped, report.failed
    ));
}

/// Print configuration with secrets masked
pub fn print_config(config: &AppConfig) {
    let config = config.redacted();
    println!("📋 ArthaVivek Configuration:");
    println!();

    println!("🗄️  Database:");
    println!("  URL: {}", config.database_url());
    println!("  Max connections: {}", config.max_connections());
    println!("  Min connections: {}", config.min_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Directory: {}", config.logging.directory);
    println!();

    println!("🤖 LLM:");
    println!("  Provider: {:?}", config.llm.provider);
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Model: {}", config.llm_model());
    println!(
        "  API key: {}",
        if config.llm_key().is_empty() {
            "(not set)"
        } else {
            config.llm_key()
        }
    );
    println!("  Temperature: {}", config.llm.temperature);
    println!("  Summary temperature: {}", config.llm.summary_temperature);
    println!("  Timeout: {}s", config.llm.timeout_secs);
    println!("  Max retries: {}", config.llm.max_retries);
    println!();

    println!("🔎 Retrieval:");
    println!("  Top K: {}", config.top_k());
    println!("  Updates limit: {}", config.updates_limit());
    println!();

    println!("🌐 Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!("  CORS: {}", config.server.enable_cors);
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("₹₹₹₹", 2), "₹₹...");
        assert_eq!(truncate_str("short", 10), "short");
    }
}
