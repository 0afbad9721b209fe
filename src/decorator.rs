//! Decorator: toppings wrap a coffee and add to its cost.
//!
//! Costs are checked: a chain whose total does not fit in a `u32` reports
//! [`PatternError::CostOverflow`] instead of wrapping.
//!
//! Each [`Decorated`] layer owns the coffee it wraps, so a finished drink is
//! a linear chain ending in exactly one [`SimpleCoffee`]. New toppings only
//! need a [`Topping`] impl; neither the base coffee nor the existing toppings
//! change.

use crate::error::{PatternError, Result};

pub trait Coffee {
    fn cost(&self) -> Result<u32>;

    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> Result<u32> {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl SimpleCoffee {
    pub const COST: u32 = 5;
}

impl Coffee for SimpleCoffee {
    fn cost(&self) -> Result<u32> {
        Ok(Self::COST)
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

// ============================================================================
// Toppings
// ============================================================================

pub trait Topping {
    fn name(&self) -> &str;
    fn price(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Milk;

impl Topping for Milk {
    fn name(&self) -> &str {
        "milk"
    }

    fn price(&self) -> u32 {
        2
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sugar;

impl Topping for Sugar {
    fn name(&self) -> &str {
        "sugar"
    }

    fn price(&self) -> u32 {
        1
    }
}

/// A topping defined at runtime, e.g. from a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub name: String,
    pub price: u32,
}

impl Extra {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Topping for Extra {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.price
    }
}

// ============================================================================
// Decorator
// ============================================================================

/// The base decorator: forwards to the wrapped coffee and adds its topping.
#[derive(Debug, Clone)]
pub struct Decorated<T, C = Box<dyn Coffee>> {
    coffee: C,
    topping: T,
}

pub type MilkDecorator<C = Box<dyn Coffee>> = Decorated<Milk, C>;
pub type SugarDecorator<C = Box<dyn Coffee>> = Decorated<Sugar, C>;

impl<T: Topping, C: Coffee> Decorated<T, C> {
    pub fn new(coffee: C, topping: T) -> Self {
        Self { coffee, topping }
    }

    pub fn topping(&self) -> &T {
        &self.topping
    }

    pub fn into_inner(self) -> C {
        self.coffee
    }
}

impl<T: Topping, C: Coffee> Coffee for Decorated<T, C> {
    fn cost(&self) -> Result<u32> {
        self.coffee
            .cost()?
            .checked_add(self.topping.price())
            .ok_or_else(|| PatternError::cost_overflow(self.topping.name()))
    }

    fn description(&self) -> String {
        format!("{}, {}", self.coffee.description(), self.topping.name())
    }
}

/// Builder-style composition: `SimpleCoffee.with_milk().with_sugar()`.
pub trait CoffeeExt: Coffee + Sized {
    fn with<T: Topping>(self, topping: T) -> Decorated<T, Self> {
        Decorated::new(self, topping)
    }

    fn with_milk(self) -> Decorated<Milk, Self> {
        self.with(Milk)
    }

    fn with_sugar(self) -> Decorated<Sugar, Self> {
        self.with(Sugar)
    }

    fn boxed(self) -> Box<dyn Coffee>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Coffee> CoffeeExt for C {}
