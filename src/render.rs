//! Terminal presentation: rotating status messages while generation is in
//! flight, and rendering of the finished article.

use crate::models::ArticlePackage;
use rand::seq::SliceRandom;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const LOADING_MESSAGES: [&str; 5] = [
    "Consulting the digital muses...",
    "Weaving words and pixels...",
    "Brewing a fresh blog post...",
    "Painting with light and logic...",
    "Asking the AI for its masterpiece...",
];

const ROTATION_INTERVAL: Duration = Duration::from_millis(2500);

/// Spawn a task that logs a randomly chosen status phrase every 2.5 seconds.
///
/// The phrases carry no meaning; they are user feedback while both provider
/// calls are in flight. The caller aborts the handle once generation
/// settles, which releases the interval with the task.
pub fn spawn_status_ticker() -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROTATION_INTERVAL);
        loop {
            interval.tick().await;
            let message = *LOADING_MESSAGES
                .choose(&mut rand::thread_rng())
                .unwrap_or(&LOADING_MESSAGES[0]);
            tracing::info!("{}", message);
        }
    })
}

/// Print the article to stdout: title, underline, then each paragraph as its
/// own block.
pub fn render_article(package: &ArticlePackage) {
    println!("\n{}", package.title);
    println!("{}", "=".repeat(package.title.chars().count().max(1)));
    for paragraph in package.paragraphs() {
        println!("\n{}", paragraph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleContent;

    #[test]
    fn test_loading_messages_are_a_fixed_non_empty_rotation() {
        assert_eq!(LOADING_MESSAGES.len(), 5);
        assert!(LOADING_MESSAGES.iter().all(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_status_ticker_stops_on_abort() {
        let ticker = spawn_status_ticker();
        ticker.abort();

        let err = ticker.await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_render_article_handles_empty_title() {
        let package = ArticlePackage::new(
            ArticleContent {
                title: String::new(),
                content: "Only paragraph.".to_string(),
            },
            Vec::new(),
        );

        // Must not panic on degenerate titles.
        render_article(&package);
    }
}
