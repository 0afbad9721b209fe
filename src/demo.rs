//! Demonstration drivers, one per pattern.
//!
//! Each driver writes the fixed demo sequence to `out`. The binaries hand in
//! a locked stdout; tests hand in a `Vec<u8>`.

use crate::abstract_factory::Family;
use crate::config::{CartConfig, DemoConfig};
use crate::decorator::{Coffee, CoffeeExt, Milk, MilkDecorator, SimpleCoffee, Sugar, SugarDecorator};
use crate::error::Result;
use crate::factory_method::{AnimalCreator, CatCreator, DogCreator};
use crate::observer::{ConcreteObserver, Observer, Subject};
use crate::singleton::Singleton;
use crate::strategy::ShoppingCart;
use crate::telemetry;
use colored::Colorize;
use std::cell::RefCell;
use std::io::{self, Write};
use std::process::ExitCode;
use std::rc::Rc;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Pattern {
    AbstractFactory,
    FactoryMethod,
    Decorator,
    Observer,
    Singleton,
    Strategy,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::AbstractFactory,
        Pattern::FactoryMethod,
        Pattern::Decorator,
        Pattern::Observer,
        Pattern::Singleton,
        Pattern::Strategy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "Abstract Factory Pattern",
            Pattern::FactoryMethod => "Factory Method Pattern",
            Pattern::Decorator => "Decorator Pattern",
            Pattern::Observer => "Observer Pattern",
            Pattern::Singleton => "Singleton Pattern",
            Pattern::Strategy => "Strategy Pattern",
        }
    }
}

pub fn heading<W: Write>(out: &mut W, title: &str, color: bool) -> Result<()> {
    let line = format!("=== {title} ===");
    if color {
        writeln!(out, "{}", line.bold().cyan())?;
    } else {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Runs one demo under its heading.
pub fn run<W: Write>(pattern: Pattern, out: &mut W, config: &DemoConfig) -> Result<()> {
    heading(out, pattern.title(), config.output.color)?;
    match pattern {
        Pattern::AbstractFactory => abstract_factory(out),
        Pattern::FactoryMethod => factory_method(out),
        Pattern::Decorator => decorator(out),
        Pattern::Observer => observer(out),
        Pattern::Singleton => singleton(out),
        Pattern::Strategy => strategy(out, &config.carts.0),
    }
}

/// Entry point for the single-pattern binaries.
pub fn run_standalone(pattern: Pattern) -> ExitCode {
    telemetry::init(LevelFilter::WARN);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(pattern, &mut out, &DemoConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn abstract_factory<W: Write>(out: &mut W) -> Result<()> {
    for (i, family) in Family::ALL.into_iter().enumerate() {
        let factory = family.factory();
        let animal = factory.create_animal();
        let habitat = factory.create_habitat();

        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{family} Habitat Description: {}", habitat.description())?;
        writeln!(out, "Animal in the {family}: {}", animal.speak())?;
    }
    Ok(())
}

pub fn factory_method<W: Write>(out: &mut W) -> Result<()> {
    let dog = DogCreator.create_animal();
    writeln!(out, "Dog says: {}", dog.speak())?;

    let cat = CatCreator.create_animal();
    writeln!(out, "Cat says: {}", cat.speak())?;
    Ok(())
}

pub fn decorator<W: Write>(out: &mut W) -> Result<()> {
    let my_coffee = SimpleCoffee.boxed();
    writeln!(out, "Cost of Simple Coffee: {}", my_coffee.cost()?)?;

    let milk_coffee = MilkDecorator::new(my_coffee, Milk).boxed();
    writeln!(out, "Cost of Milk Coffee: {}", milk_coffee.cost()?)?;

    let sugar_milk_coffee = SugarDecorator::new(milk_coffee, Sugar);
    writeln!(out, "Cost of Sugar Milk Coffee: {}", sugar_milk_coffee.cost()?)?;
    Ok(())
}

fn shared<'a, O: Observer + 'a>(observer: O) -> Rc<dyn Observer + 'a> {
    Rc::new(observer)
}

pub fn observer<W: Write>(out: &mut W) -> Result<()> {
    let out = Rc::new(RefCell::new(out));
    let mut subject = Subject::new();

    let observer1 = shared(ConcreteObserver::with_writer("Observer 1", Rc::clone(&out)));
    let observer2 = shared(ConcreteObserver::with_writer("Observer 2", Rc::clone(&out)));

    subject.attach(Rc::clone(&observer1));
    subject.attach(Rc::clone(&observer2));
    subject.notify("Hello, observers!")?;

    subject.detach(&observer1)?;
    subject.notify("Observer 1 is removed.")?;
    Ok(())
}

pub fn singleton<W: Write>(out: &mut W) -> Result<()> {
    let instance1 = Singleton::instance();
    let instance2 = Singleton::instance();

    writeln!(
        out,
        "Is instance 1 the same as instance 2? {}",
        std::ptr::eq(instance1, instance2)
    )?;
    writeln!(out, "{}", instance1.some_method())?;
    Ok(())
}

pub fn strategy<W: Write>(out: &mut W, carts: &[CartConfig]) -> Result<()> {
    for cart_config in carts {
        let mut cart = ShoppingCart::new(cart_config.payment.strategy());
        for item in &cart_config.items {
            cart.add_item(item.clone());
        }

        tracing::debug!(customer = %cart_config.customer, payment = %cart_config.payment, "checking out");
        let receipt = cart.checkout()?;
        writeln!(out, "{receipt}")?;
    }
    Ok(())
}
