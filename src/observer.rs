//! Observer: a subject fans messages out to its registered observers.
//!
//! The registry is single-threaded. Observers are shared with the caller
//! through `Rc`, so the caller keeps its own handle and uses it to detach.
//! Identity is pointer identity: two observers with the same name are still
//! different observers.

use crate::error::{PatternError, Result};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

pub trait Observer {
    fn name(&self) -> &str;

    /// Handles one notification. An error stops the notify loop.
    fn update(&self, message: &str) -> Result<()>;
}

/// Writes every message it receives to its output and keeps a copy.
///
/// Several observers can share one output; lines then appear in
/// notification order.
#[derive(Debug)]
pub struct ConcreteObserver<W = io::Stdout> {
    name: String,
    out: Rc<RefCell<W>>,
    received: RefCell<Vec<String>>,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, Rc::new(RefCell::new(io::stdout())))
    }
}

impl<W: Write> ConcreteObserver<W> {
    pub fn with_writer(name: impl Into<String>, out: Rc<RefCell<W>>) -> Self {
        Self {
            name: name.into(),
            out,
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl<W: Write> Observer for ConcreteObserver<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str) -> Result<()> {
        writeln!(self.out.borrow_mut(), "{} received message: {}", self.name, message)?;
        self.received.borrow_mut().push(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct Subject<'a> {
    observers: Vec<Rc<dyn Observer + 'a>>,
}

impl<'a> Subject<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end of the registry. The same observer may be attached
    /// more than once and is then notified once per attachment.
    pub fn attach(&mut self, observer: Rc<dyn Observer + 'a>) {
        debug!(observer = observer.name(), position = self.observers.len(), "attach");
        self.observers.push(observer);
    }

    /// Removes the first attachment of `observer`.
    pub fn detach(&mut self, observer: &Rc<dyn Observer + 'a>) -> Result<()> {
        let position = self
            .observers
            .iter()
            .position(|attached| Rc::ptr_eq(attached, observer))
            .ok_or_else(|| PatternError::observer_not_found(observer.name()))?;

        self.observers.remove(position);
        debug!(observer = observer.name(), position, "detach");
        Ok(())
    }

    /// Delivers `message` to every attached observer in attachment order and
    /// returns how many were notified.
    pub fn notify(&self, message: &str) -> Result<usize> {
        debug!(observers = self.observers.len(), msg = message, "notify");
        for observer in &self.observers {
            observer.update(message)?;
        }
        Ok(self.observers.len())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field(
                "observers",
                &self.observers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
