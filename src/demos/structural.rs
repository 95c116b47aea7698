use crate::core::{PizzeriaConfig, Result, Transcript};
use crate::structural::{
    CheeseDecorator, ConcretePizza, MushroomDecorator, OrderInterface, PizzaAdapter, PizzaChef,
    PizzaFacade, PizzaRecipe,
};
use log::info;

/// Adapter, decorator and facade, one line each
pub fn run(_config: &PizzeriaConfig, out: &Transcript) -> Result<()> {
    info!("Running structural pattern demo");

    let adapter = PizzaAdapter::new(PizzaChef);
    out.line(format!("Adapter Example: {}", adapter.order_pizza()));

    let mut pizza: Box<dyn PizzaRecipe> = Box::new(ConcretePizza);
    pizza = Box::new(CheeseDecorator::new(pizza));
    pizza = Box::new(MushroomDecorator::new(pizza));
    out.line(format!("Decorator Example: {}", pizza.make()));

    let facade = PizzaFacade::new();
    out.line(format!("Facade Example: {}", facade.make_pizza()));

    Ok(())
}
