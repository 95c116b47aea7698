pub mod adapter;
pub mod decorator;
pub mod facade;

pub use adapter::{OrderInterface, PizzaAdapter, PizzaChef, PizzaMaker};
pub use decorator::{CheeseDecorator, ConcretePizza, MushroomDecorator, PizzaRecipe, ToppingExt};
pub use facade::PizzaFacade;
