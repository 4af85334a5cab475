use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::topping::{Topping, ToppingList};
use super::{write_toppings, PizzaBuilder};
use crate::error::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaucePlacement {
    Inside,
    Outside,
}

impl fmt::Display for SaucePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SaucePlacement::Inside => "inside",
            SaucePlacement::Outside => "outside",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calzone {
    sauce: SaucePlacement,
    toppings: Box<[Topping]>,
}

impl Calzone {
    pub fn builder(sauce: SaucePlacement) -> CalzoneBuilder {
        CalzoneBuilder::new(sauce)
    }

    pub fn sauce(&self) -> SaucePlacement {
        self.sauce
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

impl fmt::Display for Calzone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calzone, sauce {}", self.sauce)?;
        write_toppings(f, &self.toppings)
    }
}

#[derive(Debug, Clone)]
pub struct CalzoneBuilder {
    sauce: SaucePlacement,
    toppings: ToppingList,
}

impl CalzoneBuilder {
    pub fn new(sauce: SaucePlacement) -> Self {
        CalzoneBuilder {
            sauce,
            toppings: ToppingList::new(),
        }
    }

    pub fn try_new(sauce: Option<SaucePlacement>) -> Result<Self, BuildError> {
        let sauce = sauce.ok_or(BuildError::null_required("sauce"))?;
        Ok(Self::new(sauce))
    }

    pub fn sauce(&self) -> SaucePlacement {
        self.sauce
    }
}

impl PizzaBuilder for CalzoneBuilder {
    type Output = Calzone;

    fn toppings(&self) -> &ToppingList {
        &self.toppings
    }

    fn toppings_mut(&mut self) -> &mut ToppingList {
        &mut self.toppings
    }

    fn build(&self) -> Calzone {
        let calzone = Calzone {
            sauce: self.sauce,
            toppings: self.toppings.freeze(),
        };
        debug!(sauce = %calzone.sauce, toppings = ?calzone.toppings, "built calzone");
        calzone
    }
}
