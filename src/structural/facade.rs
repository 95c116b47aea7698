struct DoughPreparer;

impl DoughPreparer {
    fn prepare_dough(&self) -> String {
        "Dough is ready!".to_string()
    }
}

struct ToppingAdder;

impl ToppingAdder {
    fn add_toppings(&self) -> String {
        "Toppings are added!".to_string()
    }
}

/// Single entry point over the dough and topping stations
pub struct PizzaFacade {
    dough_preparer: DoughPreparer,
    topping_adder: ToppingAdder,
}

impl PizzaFacade {
    pub fn new() -> Self {
        Self {
            dough_preparer: DoughPreparer,
            topping_adder: ToppingAdder,
        }
    }

    /// Prepare the dough, then add toppings
    pub fn make_pizza(&self) -> String {
        let dough = self.dough_preparer.prepare_dough();
        let toppings = self.topping_adder.add_toppings();
        format!("{} {}", dough, toppings)
    }
}

impl Default for PizzaFacade {
    fn default() -> Self {
        Self::new()
    }
}
