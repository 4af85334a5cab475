use anyhow::Result;
use builder_patterns::{
    CalzoneBuilder, NyPizzaBuilder, Pizza, PizzaBuilder, SaucePlacement, Size, Topping,
};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("{}", "=== New York Pizza ===".bold());
    let builder = NyPizzaBuilder::new(Size::Small)
        .add_topping(Topping::Pepper)
        .add_topping(Topping::Onion);
    let pizza = builder.build();
    println!("{} {}", "Built:".green(), pizza);

    println!("\n{}", "=== Builder Keeps Going ===".bold());
    let builder = builder.remove_topping(Topping::Onion).add_topping(Topping::Ham);
    println!("{} {}", "First: ".green(), pizza);
    println!("{} {}", "Second:".green(), builder.build());

    println!("\n{}", "=== Missing Size ===".bold());
    match NyPizzaBuilder::try_new(None) {
        Ok(_) => println!("{}", "Unexpected success".yellow()),
        Err(err) => println!("{} {}", "Expected error:".red(), err),
    }

    println!("\n{}", "=== Mixed Order ===".bold());
    let order = vec![
        Pizza::from(pizza),
        CalzoneBuilder::new(SaucePlacement::Inside)
            .add_toppings([Topping::Ham, Topping::Mushroom])
            .build_pizza(),
    ];
    for item in &order {
        println!("  {} {}", format!("[{}]", item.kind()).cyan(), item);
    }
    println!("{}", serde_json::to_string_pretty(&order)?);

    Ok(())
}
