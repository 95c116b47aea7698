use crate::behavioral::{
    BakeCommand, Customer, Invoker, OrderStatus, PackCommand, Pizza, PizzaOrder, PrepareCommand,
};
use crate::core::{PizzeriaConfig, Result, Transcript};
use log::info;
use std::rc::Rc;

/// Observer, strategy and command, in that order
pub fn run(config: &PizzeriaConfig, out: &Transcript) -> Result<()> {
    info!("Running behavioral pattern demo");

    observer(config, out);
    strategy(config, out)?;
    command(out)?;

    Ok(())
}

fn observer(config: &PizzeriaConfig, out: &Transcript) {
    let order = OrderStatus::new();
    for name in &config.customers {
        order.attach(Rc::new(Customer::new(name.clone(), out.clone())));
    }

    for status in &config.status_updates {
        order.set_status(status.clone());
    }
}

fn strategy(config: &PizzeriaConfig, out: &Transcript) -> Result<()> {
    let mut pizza = Pizza::new(config.base_price);

    for kind in &config.discounts {
        let strategy = kind.strategy();
        let label = strategy.label();
        pizza.set_pricing_strategy(strategy);
        // {:?} keeps the decimal point on whole prices ("10.0"). Exponent form
        // only starts at 1e16, so a price of 1e7 prints as "10000000.0".
        out.line(format!("Price with {}: {:?}", label, pizza.price()?));
    }

    Ok(())
}

fn command(out: &Transcript) -> Result<()> {
    let order = Rc::new(PizzaOrder::new(out.clone()));

    let prepare = Box::new(PrepareCommand::new(Rc::clone(&order)));
    let bake = Box::new(BakeCommand::new(Rc::clone(&order)));
    let pack = Box::new(PackCommand::new(Rc::clone(&order)));

    let mut invoker = Invoker::new();

    invoker.set_command(prepare);
    invoker.execute_command()?;

    invoker.set_command(bake);
    invoker.execute_command()?;

    invoker.set_command(pack);
    invoker.execute_command()?;

    Ok(())
}
