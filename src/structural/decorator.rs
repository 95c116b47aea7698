/// A describable pizza layer
pub trait PizzaRecipe {
    fn make(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcretePizza;

impl PizzaRecipe for ConcretePizza {
    fn make(&self) -> String {
        "Plain Pizza".to_string()
    }
}

/// Adds cheese on top of whatever it wraps
pub struct CheeseDecorator {
    inner: Box<dyn PizzaRecipe>,
}

impl CheeseDecorator {
    pub fn new(inner: Box<dyn PizzaRecipe>) -> Self {
        Self { inner }
    }
}

impl PizzaRecipe for CheeseDecorator {
    fn make(&self) -> String {
        format!("{} with cheese", self.inner.make())
    }
}

/// Adds mushrooms on top of whatever it wraps
pub struct MushroomDecorator {
    inner: Box<dyn PizzaRecipe>,
}

impl MushroomDecorator {
    pub fn new(inner: Box<dyn PizzaRecipe>) -> Self {
        Self { inner }
    }
}

impl PizzaRecipe for MushroomDecorator {
    fn make(&self) -> String {
        format!("{} with mushrooms", self.inner.make())
    }
}

/// Chaining helpers so layers read in wrap order:
/// `ConcretePizza.with_cheese().with_mushrooms()`
pub trait ToppingExt: PizzaRecipe + Sized + 'static {
    fn with_cheese(self) -> CheeseDecorator {
        CheeseDecorator::new(Box::new(self))
    }

    fn with_mushrooms(self) -> MushroomDecorator {
        MushroomDecorator::new(Box::new(self))
    }
}

impl<T: PizzaRecipe + 'static> ToppingExt for T {}
