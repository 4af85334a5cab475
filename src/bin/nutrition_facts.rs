use anyhow::Result;
use builder_patterns::{BuildError, NutritionFacts, NutritionLimits};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

const LABEL_LIMITS: &str = r#"
[calories]
max = 2000

[sodium]
max = 2300
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("{}", "=== Nutrition Facts ===".bold());
    let mut builder = NutritionFacts::builder(24, 2);
    let facts = builder.calories(12).sodium(144).build();
    println!("{} {}", "Built:".green(), facts);
    println!("{}", serde_json::to_string_pretty(&facts)?);

    println!("\n{}", "=== Reusing the Builder ===".bold());
    let richer = builder.calories(180).fat(7).build();
    println!("{} {}", "First: ".green(), facts);
    println!("{} {}", "Second:".green(), richer);

    println!("\n{}", "=== Validated Build ===".bold());
    let limits = NutritionLimits::from_toml_str(LABEL_LIMITS)?;
    builder.with_limits(limits).sodium(5000);
    match builder.try_build() {
        Ok(facts) => println!("{} {}", "Unexpected success:".yellow(), facts),
        Err(err @ BuildError::InvalidField { .. }) => println!("{} {}", "Rejected:".red(), err),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
