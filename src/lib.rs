//! # Builder Patterns
//!
//! Two builders that stage values in a mutable object and hand out frozen
//! results.
//!
//! ## Patterns Covered
//!
//! 1. **Fixed-Shape Builder** ([`nutrition`])
//!    - Required fields taken by the constructor
//!    - Optional fields default to zero, last write wins
//!    - Reusable `&mut self` builder, optional range validation
//!
//! 2. **Self-Typed Hierarchy Builder** ([`pizza`])
//!    - One trait shared by every concrete builder
//!    - Chained calls keep the concrete builder type
//!    - Closed set of results as the [`pizza::Pizza`] sum type
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin nutrition_facts
//! cargo run --bin ny_pizza
//! RUST_LOG=debug cargo run --bin ny_pizza
//! ```

pub mod error;
pub mod limits;
pub mod nutrition;
pub mod pizza;

pub use error::BuildError;
pub use limits::{FieldRange, NutritionLimits};
pub use nutrition::{NutritionFacts, NutritionFactsBuilder};
pub use pizza::{
    Calzone, CalzoneBuilder, NyPizza, NyPizzaBuilder, Pizza, PizzaBuilder, SaucePlacement, Size,
    Topping,
};
