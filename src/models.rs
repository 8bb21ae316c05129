//! Data models and structures
//!
//! Defines the article request vocabulary (the closed option lists a user
//! picks from), the decoded generation result, and runtime configuration.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArticleType {
    GeneralArticle,
    ArticleSeries,
    CaseStudy,
    Interview,
    TutorialGuide,
    NewsAndUpdates,
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArticleType::GeneralArticle => "General Article",
            ArticleType::ArticleSeries => "Article Series",
            ArticleType::CaseStudy => "Case Study",
            ArticleType::Interview => "Interview",
            ArticleType::TutorialGuide => "Tutorial / Guide",
            ArticleType::NewsAndUpdates => "News and Updates",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Goal {
    Educate,
    Inform,
    Engage,
    EstablishAuthority,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Educate => "Educate",
            Goal::Inform => "Inform",
            Goal::Engage => "Engage",
            Goal::EstablishAuthority => "Establish Authority",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TechnicalLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for TechnicalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TechnicalLevel::Beginner => "Beginner",
            TechnicalLevel::Intermediate => "Intermediate",
            TechnicalLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BudgetLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetLevel::Low => "Low",
            BudgetLevel::Moderate => "Moderate",
            BudgetLevel::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BudgetArea {
    WebDevelopment,
    ContentCreation,
    Marketing,
    Maintenance,
}

impl fmt::Display for BudgetArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetArea::WebDevelopment => "Web Development",
            BudgetArea::ContentCreation => "Content Creation",
            BudgetArea::Marketing => "Marketing",
            BudgetArea::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

/// Named prompt-style preset applied to both the content and image prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineVariant {
    #[default]
    BlogWeaver,
    Narrato,
    GravityWrite,
}

impl EngineVariant {
    /// Resolve a variant from its display label by exact match. Anything
    /// unrecognized falls back to the default Blog Weaver variant.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Narrato Style" => EngineVariant::Narrato,
            "Gravity Write Style" => EngineVariant::GravityWrite,
            _ => EngineVariant::BlogWeaver,
        }
    }
}

impl fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EngineVariant::BlogWeaver => "Blog Weaver (Default)",
            EngineVariant::Narrato => "Narrato Style",
            EngineVariant::GravityWrite => "Gravity Write Style",
        };
        f.write_str(label)
    }
}

/// Everything the user chose for one generation round.
///
/// `goals` and `budget_areas` are duplicate-free, order-preserving sets.
#[derive(Debug, Clone)]
pub struct ArticleRequest {
    pub topic: String,
    pub audience: Option<String>,
    pub article_type: ArticleType,
    pub goals: Vec<Goal>,
    pub technical_level: TechnicalLevel,
    pub budget: BudgetLevel,
    pub budget_areas: Vec<BudgetArea>,
    pub engine: EngineVariant,
}

impl ArticleRequest {
    /// Request with the form's default selections.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: None,
            article_type: ArticleType::GeneralArticle,
            goals: Vec::new(),
            technical_level: TechnicalLevel::Intermediate,
            budget: BudgetLevel::Moderate,
            budget_areas: Vec::new(),
            engine: EngineVariant::BlogWeaver,
        }
    }

    /// A blank audience is treated as absent.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        let audience = audience.into();
        self.audience = if audience.trim().is_empty() {
            None
        } else {
            Some(audience)
        };
        self
    }

    pub fn with_article_type(mut self, article_type: ArticleType) -> Self {
        self.article_type = article_type;
        self
    }

    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = dedup_preserving_order(goals);
        self
    }

    pub fn with_technical_level(mut self, technical_level: TechnicalLevel) -> Self {
        self.technical_level = technical_level;
        self
    }

    pub fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_budget_areas(mut self, budget_areas: Vec<BudgetArea>) -> Self {
        self.budget_areas = dedup_preserving_order(budget_areas);
        self
    }

    pub fn with_engine(mut self, engine: EngineVariant) -> Self {
        self.engine = engine;
        self
    }
}

fn dedup_preserving_order<T: PartialEq + Copy>(values: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Article text decoded from the provider's JSON payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArticleContent {
    pub title: String,
    pub content: String,
}

/// Separator between paragraphs in [`ArticleContent::content`].
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A fully decoded generation round: article text plus the JPEG hero image.
///
/// Exists only when both provider calls and decoding succeeded; there is no
/// partial form.
#[derive(Debug, Clone)]
pub struct ArticlePackage {
    pub title: String,
    pub content: String,
    pub image_bytes: Vec<u8>,
}

impl ArticlePackage {
    pub fn new(article: ArticleContent, image_bytes: Vec<u8>) -> Self {
        Self {
            title: article.title,
            content: article.content,
            image_bytes,
        }
    }

    /// Content split on the double-newline separator. Joining the pieces
    /// back with the same separator reproduces `content` exactly.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split(PARAGRAPH_SEPARATOR).collect()
    }

    /// The hero image as a `data:image/jpeg;base64,...` URI.
    pub fn image_data_uri(&self) -> String {
        use base64::Engine as _;
        format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.image_bytes)
        )
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub content_model: String,
    pub image_model: String,
    pub output_dir: PathBuf,
}

pub const DEFAULT_CONTENT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            content_model: std::env::var("GEMINI_CONTENT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CONTENT_MODEL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_labels_match_form_options() {
        assert_eq!(ArticleType::TutorialGuide.to_string(), "Tutorial / Guide");
        assert_eq!(ArticleType::NewsAndUpdates.to_string(), "News and Updates");
        assert_eq!(
            Goal::EstablishAuthority.to_string(),
            "Establish Authority"
        );
        assert_eq!(BudgetArea::WebDevelopment.to_string(), "Web Development");
        assert_eq!(
            EngineVariant::BlogWeaver.to_string(),
            "Blog Weaver (Default)"
        );
    }

    #[test]
    fn test_engine_variant_exact_label_match() {
        assert_eq!(
            EngineVariant::from_label("Narrato Style"),
            EngineVariant::Narrato
        );
        assert_eq!(
            EngineVariant::from_label("Gravity Write Style"),
            EngineVariant::GravityWrite
        );
    }

    #[test]
    fn test_engine_variant_unrecognized_falls_back_to_default() {
        assert_eq!(
            EngineVariant::from_label("narrato style"),
            EngineVariant::BlogWeaver
        );
        assert_eq!(EngineVariant::from_label(""), EngineVariant::BlogWeaver);
        assert_eq!(
            EngineVariant::from_label("Something Else"),
            EngineVariant::BlogWeaver
        );
    }

    #[test]
    fn test_goals_and_budget_areas_are_sets() {
        let request = ArticleRequest::new("Rust")
            .with_goals(vec![Goal::Engage, Goal::Educate, Goal::Engage])
            .with_budget_areas(vec![
                BudgetArea::Marketing,
                BudgetArea::Marketing,
                BudgetArea::Maintenance,
            ]);

        assert_eq!(request.goals, vec![Goal::Engage, Goal::Educate]);
        assert_eq!(
            request.budget_areas,
            vec![BudgetArea::Marketing, BudgetArea::Maintenance]
        );
    }

    #[test]
    fn test_blank_audience_is_absent() {
        assert_eq!(ArticleRequest::new("x").with_audience("  ").audience, None);
        assert_eq!(
            ArticleRequest::new("x").with_audience("developers").audience,
            Some("developers".to_string())
        );
    }

    #[test]
    fn test_paragraph_round_trip() {
        let package = ArticlePackage::new(
            ArticleContent {
                title: "T".to_string(),
                content: "First paragraph.\n\nSecond paragraph.\n\nThird.".to_string(),
            },
            vec![0xFF, 0xD8, 0xFF],
        );

        let rejoined = package.paragraphs().join(PARAGRAPH_SEPARATOR);
        assert_eq!(rejoined, package.content);
        assert_eq!(package.paragraphs().len(), 3);
    }

    #[test]
    fn test_image_data_uri_has_jpeg_prefix() {
        let package = ArticlePackage::new(
            ArticleContent {
                title: "T".to_string(),
                content: "C".to_string(),
            },
            vec![0xFF, 0xD8, 0xFF, 0xE0],
        );

        let uri = package.image_data_uri();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(uri, "data:image/jpeg;base64,/9j/4A==");
    }
}
