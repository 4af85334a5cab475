use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::topping::{Topping, ToppingList};
use super::{write_toppings, PizzaBuilder};
use crate::error::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        })
    }
}

/// New York style pizza. The size is fixed when the builder is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NyPizza {
    size: Size,
    toppings: Box<[Topping]>,
}

impl NyPizza {
    pub fn builder(size: Size) -> NyPizzaBuilder {
        NyPizzaBuilder::new(size)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

impl fmt::Display for NyPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} New York pizza", self.size)?;
        write_toppings(f, &self.toppings)
    }
}

#[derive(Debug, Clone)]
pub struct NyPizzaBuilder {
    size: Size,
    toppings: ToppingList,
}

impl NyPizzaBuilder {
    pub fn new(size: Size) -> Self {
        NyPizzaBuilder {
            size,
            toppings: ToppingList::new(),
        }
    }

    /// For sizes that arrive from outside the type system, e.g. a parsed order.
    /// A missing size fails here, before any topping can be staged.
    pub fn try_new(size: Option<Size>) -> Result<Self, BuildError> {
        let size = size.ok_or(BuildError::null_required("size"))?;
        Ok(Self::new(size))
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl PizzaBuilder for NyPizzaBuilder {
    type Output = NyPizza;

    fn toppings(&self) -> &ToppingList {
        &self.toppings
    }

    fn toppings_mut(&mut self) -> &mut ToppingList {
        &mut self.toppings
    }

    fn build(&self) -> NyPizza {
        let pizza = NyPizza {
            size: self.size,
            toppings: self.toppings.freeze(),
        };
        debug!(size = %pizza.size, toppings = ?pizza.toppings, "built New York pizza");
        pizza
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toppings_in_order() {
        let pizza = NyPizza::builder(Size::Small)
            .add_topping(Topping::Pepper)
            .add_topping(Topping::Onion)
            .build();

        assert_eq!(pizza.size(), Size::Small);
        assert_eq!(pizza.toppings(), &[Topping::Pepper, Topping::Onion]);
    }

    #[test]
    fn test_missing_size_fails_fast() {
        let result = NyPizzaBuilder::try_new(None);
        assert_eq!(result.unwrap_err(), BuildError::null_required("size"));
    }

    #[test]
    fn test_try_new_with_size() {
        let builder = NyPizzaBuilder::try_new(Some(Size::Medium)).unwrap();
        assert_eq!(builder.size(), Size::Medium);
        assert!(builder.toppings().is_empty());
    }

    #[test]
    fn test_later_changes_do_not_reach_built_pizza() {
        let builder = NyPizzaBuilder::new(Size::Small)
            .add_topping(Topping::Pepper)
            .add_topping(Topping::Onion);
        let first = builder.build();

        let builder = builder.remove_topping(Topping::Onion);
        let second = builder.build();

        assert_eq!(first.toppings(), &[Topping::Pepper, Topping::Onion]);
        assert_eq!(second.toppings(), &[Topping::Pepper]);
    }

    #[test]
    fn test_remove_missing_topping() {
        let pizza = NyPizzaBuilder::new(Size::Large)
            .add_topping(Topping::Ham)
            .remove_topping(Topping::Sausage)
            .build();
        assert_eq!(pizza.toppings(), &[Topping::Ham]);
    }

    #[test]
    fn test_display_plain() {
        let pizza = NyPizzaBuilder::new(Size::Medium).build();
        assert_eq!(pizza.to_string(), "medium New York pizza, plain");
    }
}
