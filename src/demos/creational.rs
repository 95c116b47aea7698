use crate::core::{PizzeriaConfig, Result, Transcript};
use crate::creational::{Director, HawaiianPizzaBuilder, PizzeriaRegistry};
use log::info;
use std::rc::Rc;

/// Singleton, factory method and builder, one after another
pub fn run(config: &PizzeriaConfig, out: &Transcript) -> Result<()> {
    info!("Running creational pattern demo");

    out.line("Singleton Demo:");
    singleton(config, out);

    out.blank();
    out.line("Factory Method Demo:");
    factory_method(config, out);

    out.blank();
    out.line("Builder Demo:");
    builder(out);

    Ok(())
}

fn singleton(config: &PizzeriaConfig, out: &Transcript) {
    let mut registry = PizzeriaRegistry::new();
    let first = registry.get_instance(&config.pizzeria_name);
    let second = registry.get_instance(&config.rival_name);

    out.line(first.name());
    out.line(second.name());
    out.line(Rc::ptr_eq(&first, &second).to_string());
}

fn factory_method(config: &PizzeriaConfig, out: &Transcript) {
    for kind in &config.menu {
        let pizza = kind.factory().create_pizza();
        out.line(pizza.prepare());
    }
}

fn builder(out: &Transcript) {
    let mut director = Director::new(HawaiianPizzaBuilder::new());

    out.line("Hawaiian Pizza: ");
    director.build_hawaiian_pizza();
    out.line(director.product().list_parts());
}
