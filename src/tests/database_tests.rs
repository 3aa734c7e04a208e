//! PostgreSQL-backed store tests; run with `cargo test -- --ignored` against a scratch database

use chrono::TimeZone;
use chrono::Utc;

use super::*;
use crate::models::NewKnowledgeDocument;
use crate::store::KnowledgeWriter;

fn document(topic: &str, content: &str, videos: &[&str]) -> NewKnowledgeDocument {
    NewKnowledgeDocument {
        topic: topic.to_string(),
        content: content.to_string(),
        tags: vec!["test".to_string()],
        personas: vec!["student".to_string()],
        related_videos: videos.iter().map(|v| (*v).to_string()).collect(),
        related_blogs: vec![],
    }
}

async fn cleanup(database: &Database, prefix: &str) -> Result<()> {
    sqlx::query("DELETE FROM knowledge_base WHERE topic LIKE $1")
        .bind(format!("{prefix}%"))
        .execute(database.pool())
        .await?;
    sqlx::query("DELETE FROM updates WHERE original_link LIKE $1")
        .bind(format!("https://test.invalid/{prefix}%"))
        .execute(database.pool())
        .await?;
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database"]
async fn test_full_text_search_ranks_matches() -> Result<()> {
    let database = create_test_database().await?;
    cleanup(&database, "dbtest-search").await?;

    database
        .insert_document(&document(
            "dbtest-search SIP",
            "A systematic investment plan lets you invest monthly. Investing early compounds.",
            &["https://youtu.be/sip"],
        ))
        .await?;
    database
        .insert_document(&document(
            "dbtest-search Insurance",
            "Term insurance protects your family.",
            &[],
        ))
        .await?;

    let results = database.search("start investing monthly", 3).await?;
    assert!(results
        .iter()
        .any(|r| r.document.topic == "dbtest-search SIP"));
    assert!(results
        .windows(2)
        .all(|pair| pair[0].relevance_score >= pair[1].relevance_score));
    assert!(!results
        .iter()
        .any(|r| r.document.topic == "dbtest-search Insurance"));

    assert!(database.topic_exists("dbtest-search SIP").await?);
    cleanup(&database, "dbtest-search").await?;
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database"]
async fn test_stopword_only_query_matches_nothing() -> Result<()> {
    let database = create_test_database().await?;
    let results = database.search("the and of", 3).await?;
    assert!(results.is_empty());
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database"]
async fn test_updates_are_newest_first_and_unique() -> Result<()> {
    let database = create_test_database().await?;
    cleanup(&database, "dbtest-updates").await?;

    for day in 1..=3 {
        let article = UpdateArticle {
            title: format!("dbtest-updates {day}"),
            source: "RBI".to_string(),
            date_published: Utc.with_ymd_and_hms(2099, 1, day, 0, 0, 0).unwrap(),
            summary: "summary".to_string(),
            original_link: format!("https://test.invalid/dbtest-updates/{day}"),
        };
        assert!(database.insert_update(&article).await?);
        assert!(!database.insert_update(&article).await?);
    }

    let latest = database.latest_updates(2).await?;
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].title, "dbtest-updates 3");
    assert_eq!(latest[1].title, "dbtest-updates 2");

    cleanup(&database, "dbtest-updates").await?;
    Ok(())
}
