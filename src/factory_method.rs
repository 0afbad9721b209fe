//! Factory Method: the creator trait leaves `create_animal` to implementors
//! and builds its own behavior (`speak`) on top of whatever they return.

pub trait Animal {
    fn speak(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "Woof!"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow!"
    }
}

pub trait AnimalCreator {
    /// The factory method.
    fn create_animal(&self) -> Box<dyn Animal>;

    fn speak(&self) -> &'static str {
        let animal = self.create_animal();
        animal.speak()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DogCreator;

impl AnimalCreator for DogCreator {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatCreator;

impl AnimalCreator for CatCreator {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}
