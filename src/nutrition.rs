//! Fixed-shape builder: two required fields, four optional ones that default to zero.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::BuildError;
use crate::limits::NutritionLimits;

/// Immutable nutrition label. Only [`NutritionFactsBuilder`] can create one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NutritionFacts {
    serving_size: i32,
    servings: i32,
    calories: i32,
    fat: i32,
    sodium: i32,
    carbohydrate: i32,
}

impl NutritionFacts {
    /// Entry point to the builder; both required fields are taken up front.
    pub fn builder(serving_size: i32, servings: i32) -> NutritionFactsBuilder {
        NutritionFactsBuilder::new(serving_size, servings)
    }

    pub fn serving_size(&self) -> i32 {
        self.serving_size
    }

    pub fn servings(&self) -> i32 {
        self.servings
    }

    pub fn calories(&self) -> i32 {
        self.calories
    }

    pub fn fat(&self) -> i32 {
        self.fat
    }

    pub fn sodium(&self) -> i32 {
        self.sodium
    }

    pub fn carbohydrate(&self) -> i32 {
        self.carbohydrate
    }
}

impl fmt::Display for NutritionFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "serving size {}, {} servings, {} kcal, fat {}g, sodium {}mg, carbohydrate {}g",
            self.serving_size, self.servings, self.calories, self.fat, self.sodium, self.carbohydrate
        )
    }
}

/// Reusable staging object for [`NutritionFacts`].
///
/// Setters take `&mut self` and return `&mut Self`, so calls chain and the
/// builder survives `build()`. Every built value is a fresh copy; later
/// changes to the builder never reach it.
///
/// Values are stored as given. Negative or absurd numbers are accepted by
/// [`build`](Self::build); use [`try_build`](Self::try_build) to check them
/// against [`NutritionLimits`].
#[derive(Debug, Clone)]
pub struct NutritionFactsBuilder {
    serving_size: i32,
    servings: i32,
    calories: i32,
    fat: i32,
    sodium: i32,
    carbohydrate: i32,
    limits: NutritionLimits,
}

impl NutritionFactsBuilder {
    pub fn new(serving_size: i32, servings: i32) -> Self {
        NutritionFactsBuilder {
            serving_size,
            servings,
            calories: 0,
            fat: 0,
            sodium: 0,
            carbohydrate: 0,
            limits: NutritionLimits::default(),
        }
    }

    pub fn calories(&mut self, calories: i32) -> &mut Self {
        self.calories = calories;
        self
    }

    pub fn fat(&mut self, fat: i32) -> &mut Self {
        self.fat = fat;
        self
    }

    pub fn sodium(&mut self, sodium: i32) -> &mut Self {
        self.sodium = sodium;
        self
    }

    pub fn carbohydrate(&mut self, carbohydrate: i32) -> &mut Self {
        self.carbohydrate = carbohydrate;
        self
    }

    /// Limits used by [`try_build`](Self::try_build). Ignored by `build`.
    pub fn with_limits(&mut self, limits: NutritionLimits) -> &mut Self {
        self.limits = limits;
        self
    }

    pub fn build(&self) -> NutritionFacts {
        let facts = NutritionFacts {
            serving_size: self.serving_size,
            servings: self.servings,
            calories: self.calories,
            fat: self.fat,
            sodium: self.sodium,
            carbohydrate: self.carbohydrate,
        };
        debug!(?facts, "built nutrition facts");
        facts
    }

    /// Like `build`, but rejects the first field outside its configured range.
    pub fn try_build(&self) -> Result<NutritionFacts, BuildError> {
        let limits = &self.limits;
        let facts = NutritionFacts {
            serving_size: limits.serving_size.check("serving_size", self.serving_size)?,
            servings: limits.servings.check("servings", self.servings)?,
            calories: limits.calories.check("calories", self.calories)?,
            fat: limits.fat.check("fat", self.fat)?,
            sodium: limits.sodium.check("sodium", self.sodium)?,
            carbohydrate: limits.carbohydrate.check("carbohydrate", self.carbohydrate)?,
        };
        debug!(?facts, "built validated nutrition facts");
        Ok(facts)
    }
}
