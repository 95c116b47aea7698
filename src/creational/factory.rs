use serde::{Deserialize, Serialize};

/// A pizza that can be prepared
pub trait Pizza {
    fn prepare(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margherita;

impl Pizza for Margherita {
    fn prepare(&self) -> String {
        "Preparing Margherita Pizza".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pepperoni;

impl Pizza for Pepperoni {
    fn prepare(&self) -> String {
        "Preparing Pepperoni Pizza".to_string()
    }
}

/// Creator role: each concrete factory produces exactly one kind of pizza
pub trait PizzaFactory {
    fn create_pizza(&self) -> Box<dyn Pizza>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MargheritaFactory;

impl PizzaFactory for MargheritaFactory {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(Margherita)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PepperoniFactory;

impl PizzaFactory for PepperoniFactory {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(Pepperoni)
    }
}

/// Menu entry naming one of the pizzas the pizzeria can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaKind {
    Margherita,
    Pepperoni,
}

impl PizzaKind {
    /// The factory responsible for this kind
    pub fn factory(self) -> Box<dyn PizzaFactory> {
        match self {
            PizzaKind::Margherita => Box::new(MargheritaFactory),
            PizzaKind::Pepperoni => Box::new(PepperoniFactory),
        }
    }
}
