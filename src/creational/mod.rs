pub mod builder;
pub mod factory;
pub mod singleton;

pub use builder::{Director, HawaiianPizzaBuilder, PizzaBuilder, PizzaProduct};
pub use factory::{Margherita, MargheritaFactory, Pepperoni, PepperoniFactory, Pizza, PizzaFactory, PizzaKind};
pub use singleton::{Pizzeria, PizzeriaRegistry};
