//! Builders for a closed family of pizzas.
//!
//! Every concrete builder implements [`PizzaBuilder`]. The trait's mutators
//! take and return `Self`, so a chain started on [`NyPizzaBuilder`] stays a
//! `NyPizzaBuilder` after `add_topping` and ends in a typed `build()`:
//!
//! ```
//! use builder_patterns::pizza::{NyPizza, NyPizzaBuilder, PizzaBuilder, Size, Topping};
//!
//! let pizza: NyPizza = NyPizzaBuilder::new(Size::Small)
//!     .add_topping(Topping::Pepper)
//!     .add_topping(Topping::Onion)
//!     .build();
//!
//! assert_eq!(pizza.size(), Size::Small);
//! assert_eq!(pizza.toppings(), &[Topping::Pepper, Topping::Onion]);
//! ```
//!
//! The built kinds are collected in the [`Pizza`] sum type.

mod calzone;
mod ny;
mod topping;

use std::fmt;

use serde::Serialize;

pub use calzone::{Calzone, CalzoneBuilder, SaucePlacement};
pub use ny::{NyPizza, NyPizzaBuilder, Size};
pub use topping::{Topping, ToppingList};

/// Shared staging behaviour for every pizza kind.
///
/// Implementors only expose their topping list and their own `build`; the
/// chaining methods come for free and return the implementor's type.
pub trait PizzaBuilder: Sized {
    type Output: Into<Pizza>;

    fn toppings(&self) -> &ToppingList;

    fn toppings_mut(&mut self) -> &mut ToppingList;

    /// Freezes a copy of the staged state. The builder stays usable.
    fn build(&self) -> Self::Output;

    fn add_topping(mut self, topping: Topping) -> Self {
        self.toppings_mut().add(topping);
        self
    }

    fn add_toppings<I>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = Topping>,
    {
        self.toppings_mut().extend(toppings);
        self
    }

    /// Drops the first matching topping; does nothing if it was never added.
    fn remove_topping(mut self, topping: Topping) -> Self {
        self.toppings_mut().remove(topping);
        self
    }

    fn has_topping(&self, topping: Topping) -> bool {
        self.toppings().contains(topping)
    }

    fn build_pizza(&self) -> Pizza {
        self.build().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pizza {
    NewYork(NyPizza),
    Calzone(Calzone),
}

impl Pizza {
    pub fn toppings(&self) -> &[Topping] {
        match self {
            Pizza::NewYork(p) => p.toppings(),
            Pizza::Calzone(p) => p.toppings(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Pizza::NewYork(_) => "New York pizza",
            Pizza::Calzone(_) => "calzone",
        }
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pizza::NewYork(p) => fmt::Display::fmt(p, f),
            Pizza::Calzone(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<NyPizza> for Pizza {
    fn from(pizza: NyPizza) -> Self {
        Pizza::NewYork(pizza)
    }
}

impl From<Calzone> for Pizza {
    fn from(calzone: Calzone) -> Self {
        Pizza::Calzone(calzone)
    }
}

pub(crate) fn write_toppings(f: &mut fmt::Formatter<'_>, toppings: &[Topping]) -> fmt::Result {
    use itertools::Itertools;

    if toppings.is_empty() {
        f.write_str(", plain")
    } else {
        write!(f, " with {}", toppings.iter().join(", "))
    }
}
