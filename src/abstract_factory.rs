//! Abstract Factory: one factory per family, each handing out a matched set
//! of products.
//!
//! A [`ForestFactory`] only ever produces forest-family products and a
//! [`HouseFactory`] only house-family ones. Client code works against
//! [`AbstractFactory`] and never names a concrete product.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Forest,
    House,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Forest, Family::House];

    pub fn factory(self) -> Box<dyn AbstractFactory> {
        match self {
            Family::Forest => Box::new(ForestFactory),
            Family::House => Box::new(HouseFactory),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Forest => f.write_str("Forest"),
            Family::House => f.write_str("House"),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

pub trait Animal {
    fn speak(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;
}

pub trait Habitat {
    fn description(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "Woof!"
    }

    fn name(&self) -> &'static str {
        "Dog"
    }

    fn family(&self) -> Family {
        Family::Forest
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow!"
    }

    fn name(&self) -> &'static str {
        "Cat"
    }

    fn family(&self) -> Family {
        Family::House
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Forest;

impl Habitat for Forest {
    fn description(&self) -> &'static str {
        "A forest habitat."
    }

    fn name(&self) -> &'static str {
        "Forest"
    }

    fn family(&self) -> Family {
        Family::Forest
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct House;

impl Habitat for House {
    fn description(&self) -> &'static str {
        "A house habitat."
    }

    fn name(&self) -> &'static str {
        "House"
    }

    fn family(&self) -> Family {
        Family::House
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait AbstractFactory {
    fn create_animal(&self) -> Box<dyn Animal>;
    fn create_habitat(&self) -> Box<dyn Habitat>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForestFactory;

impl AbstractFactory for ForestFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }

    fn create_habitat(&self) -> Box<dyn Habitat> {
        Box::new(Forest)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HouseFactory;

impl AbstractFactory for HouseFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }

    fn create_habitat(&self) -> Box<dyn Habitat> {
        Box::new(House)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_factory_products() {
        let factory = ForestFactory;
        let animal = factory.create_animal();
        let habitat = factory.create_habitat();

        assert_eq!(animal.name(), "Dog");
        assert_eq!(animal.speak(), "Woof!");
        assert_eq!(habitat.name(), "Forest");
        assert_eq!(habitat.description(), "A forest habitat.");
    }

    #[test]
    fn test_house_factory_products() {
        let factory = HouseFactory;
        let animal = factory.create_animal();
        let habitat = factory.create_habitat();

        assert_eq!(animal.name(), "Cat");
        assert_eq!(animal.speak(), "Meow!");
        assert_eq!(habitat.name(), "House");
        assert_eq!(habitat.description(), "A house habitat.");
    }

    #[test]
    fn test_every_factory_yields_one_family() {
        for family in Family::ALL {
            let factory = family.factory();
            // Repeated calls must stay in the same family too.
            for _ in 0..3 {
                assert_eq!(factory.create_animal().family(), family);
                assert_eq!(factory.create_habitat().family(), family);
            }
        }
    }

    #[test]
    fn test_forest_never_yields_cat() {
        let factory = Family::Forest.factory();
        assert_ne!(factory.create_animal().name(), "Cat");
    }

    #[test]
    fn test_family_display() {
        assert_eq!(Family::Forest.to_string(), "Forest");
        assert_eq!(Family::House.to_string(), "House");
    }
}
