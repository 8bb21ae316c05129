use anyhow::Result;
use blogweaver::app::App;
use blogweaver::models::{
    ArticleRequest, ArticleType, BudgetArea, BudgetLevel, EngineVariant, Goal, TechnicalLevel,
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "blogweaver")]
#[command(about = "Generate a blog post and matching hero image with Gemini")]
struct CliArgs {
    /// Topic to write about.
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Intended audience, e.g. "startup founders".
    #[arg(long)]
    audience: Option<String>,

    #[arg(long, value_enum, default_value = "general-article")]
    article_type: ArticleType,

    /// Goal for the article; repeat the flag to combine goals.
    #[arg(long = "goal", value_enum)]
    goals: Vec<Goal>,

    #[arg(long, value_enum, default_value = "intermediate")]
    technical_level: TechnicalLevel,

    #[arg(long, value_enum, default_value = "moderate")]
    budget: BudgetLevel,

    /// Budget focus area; repeat the flag to combine areas.
    #[arg(long = "budget-area", value_enum)]
    budget_areas: Vec<BudgetArea>,

    /// Prompt style preset, matched by exact label ("Narrato Style",
    /// "Gravity Write Style"). Anything else uses the default style.
    #[arg(long, default_value = "Blog Weaver (Default)", value_parser = parse_engine_arg)]
    engine: EngineVariant,
}

fn parse_engine_arg(input: &str) -> std::result::Result<EngineVariant, String> {
    Ok(EngineVariant::from_label(input))
}

impl CliArgs {
    fn into_request(self) -> ArticleRequest {
        let mut request = ArticleRequest::new(self.topic)
            .with_article_type(self.article_type)
            .with_goals(self.goals)
            .with_technical_level(self.technical_level)
            .with_budget(self.budget)
            .with_budget_areas(self.budget_areas)
            .with_engine(self.engine);
        if let Some(audience) = self.audience {
            request = request.with_audience(audience);
        }
        request
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogweaver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting blogweaver");

    let args = CliArgs::parse();
    let request = args.into_request();

    match App::new() {
        Ok(app) => match app.run(&request).await {
            Ok(_) => {
                info!("Generation completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_the_form_defaults() {
        let args = CliArgs::try_parse_from(["blogweaver", "Rust"]).unwrap();
        let request = args.into_request();

        assert_eq!(request.article_type, ArticleType::GeneralArticle);
        assert_eq!(request.technical_level, TechnicalLevel::Intermediate);
        assert_eq!(request.budget, BudgetLevel::Moderate);
        assert_eq!(request.engine, EngineVariant::BlogWeaver);
        assert!(request.goals.is_empty());
        assert!(request.budget_areas.is_empty());
        assert_eq!(request.audience, None);
    }

    #[test]
    fn test_cli_repeatable_multi_select_flags() {
        let args = CliArgs::try_parse_from([
            "blogweaver",
            "Rust",
            "--goal",
            "engage",
            "--goal",
            "establish-authority",
            "--goal",
            "engage",
            "--budget-area",
            "marketing",
        ])
        .unwrap();
        let request = args.into_request();

        assert_eq!(request.goals, vec![Goal::Engage, Goal::EstablishAuthority]);
        assert_eq!(request.budget_areas, vec![BudgetArea::Marketing]);
    }

    #[test]
    fn test_parse_engine_arg_exact_match() {
        assert_eq!(
            parse_engine_arg("Narrato Style").unwrap(),
            EngineVariant::Narrato
        );
    }

    #[test]
    fn test_parse_engine_arg_unrecognized_falls_back() {
        assert_eq!(
            parse_engine_arg("some future engine").unwrap(),
            EngineVariant::BlogWeaver
        );
    }
}
