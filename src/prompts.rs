//! Prompt composition for the content and image generation calls.
//!
//! Pure functions from an [`ArticleRequest`] to the two natural-language
//! prompts sent to the provider. The skeletons live in `data/prompts/` and
//! conditional clauses are substituted into `{{key}}` placeholders.

use crate::models::{ArticleRequest, BudgetArea, BudgetLevel, EngineVariant, Goal};
use std::fmt::Display;

pub const CONTENT_TEMPLATE: &str = include_str!("../data/prompts/content_prompt.txt");
pub const IMAGE_TEMPLATE: &str = include_str!("../data/prompts/image_prompt.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Prompt requesting the article as a `{title, content}` JSON object.
pub fn content_prompt(request: &ArticleRequest) -> String {
    render(
        CONTENT_TEMPLATE,
        &[
            ("topic", &request.topic),
            ("engine_style", engine_style(request.engine)),
            ("article_type", &request.article_type.to_string()),
            (
                "audience_clause",
                &audience_clause(request.audience.as_deref(), "post", "tailored for"),
            ),
            ("technical_level", &request.technical_level.to_string()),
            ("goals_clause", &goals_clause(&request.goals)),
            (
                "budget_clause",
                &content_budget_clause(request.budget, &request.budget_areas),
            ),
        ],
    )
}

/// Prompt requesting the 16:9 hero image. Never asks for text or logos.
pub fn image_prompt(request: &ArticleRequest) -> String {
    render(
        IMAGE_TEMPLATE,
        &[
            ("topic", &request.topic),
            ("article_type", &request.article_type.to_string()),
            (
                "audience_clause",
                &audience_clause(request.audience.as_deref(), "image", "suitable for"),
            ),
            ("technical_level", &request.technical_level.to_string()),
            ("engagement_clause", engagement_clause(&request.goals)),
            (
                "budget_clause",
                &image_budget_clause(request.budget, &request.budget_areas),
            ),
            ("engine_style", engine_image_style(request.engine)),
        ],
    )
}

fn engine_style(engine: EngineVariant) -> &'static str {
    match engine {
        EngineVariant::Narrato => {
            "Emulate the style of Narrato.io, focusing on creating a well-optimized, \
             SEO-friendly article from scratch. Incorporate content ideas and structure it \
             like a professional content brief or template. The tone should be authoritative \
             and comprehensive."
        }
        EngineVariant::GravityWrite => {
            "Emulate the style of GravityWrite.com, generating a concise, highly SEO-friendly \
             blog post quickly. The structure should be clear and easy to read, with \
             well-defined sections. The content should be suitable for a global audience and \
             easily translatable."
        }
        // Default "Blog Weaver" style adds no directive.
        EngineVariant::BlogWeaver => "",
    }
}

fn engine_image_style(engine: EngineVariant) -> &'static str {
    match engine {
        EngineVariant::Narrato => {
            "The image should look like a professional, optimized stock photo suitable for a \
             content template."
        }
        EngineVariant::GravityWrite => {
            "The image should have a customizable and versatile feel, suitable for a wide \
             range of international blogs."
        }
        EngineVariant::BlogWeaver => {
            "High quality, cinematic, suitable for a tech or business blog."
        }
    }
}

fn audience_clause(audience: Option<&str>, subject: &str, fit: &str) -> String {
    match audience {
        Some(audience) => format!(
            "The {} should be {} an audience of \"{}\".",
            subject, fit, audience
        ),
        None => String::new(),
    }
}

fn goals_clause(goals: &[Goal]) -> String {
    if goals.is_empty() {
        String::new()
    } else {
        format!(
            "The primary goals of this article are to: {}.",
            join_labels(goals)
        )
    }
}

fn engagement_clause(goals: &[Goal]) -> &'static str {
    if goals.contains(&Goal::Engage) {
        "The image should be engaging and dynamic."
    } else {
        "The image should be informative and clean."
    }
}

fn content_budget_clause(budget: BudgetLevel, areas: &[BudgetArea]) -> String {
    if areas.is_empty() {
        format!(
            "The article should be written considering a \"{}\" budget.",
            budget
        )
    } else {
        format!(
            "The article should be written considering a \"{}\" budget, with a focus on these areas: {}.",
            budget,
            join_labels(areas)
        )
    }
}

fn image_budget_clause(budget: BudgetLevel, areas: &[BudgetArea]) -> String {
    if areas.is_empty() {
        format!(
            "The image's aesthetic should align with a \"{}\" budget.",
            budget
        )
    } else {
        format!(
            "The image's aesthetic should align with a \"{}\" budget, and be relevant to {}.",
            budget,
            join_labels(areas)
        )
    }
}

fn join_labels<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
