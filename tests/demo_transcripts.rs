use pizzeria_patterns::behavioral::{DiscountKind, OrderStatus, StatusListener};
use pizzeria_patterns::creational::PizzaKind;
use pizzeria_patterns::demos::{behavioral, creational, structural};
use pizzeria_patterns::{PizzeriaConfig, Transcript};
use std::cell::Cell;
use std::rc::Rc;

fn run_demo(
    demo: fn(&PizzeriaConfig, &Transcript) -> pizzeria_patterns::Result<()>,
    config: &PizzeriaConfig,
) -> Vec<String> {
    let transcript = Transcript::recording();
    demo(config, &transcript).expect("demo should succeed");
    transcript.lines()
}

#[test]
fn test_creational_transcript() {
    let lines = run_demo(creational::run, &PizzeriaConfig::default());

    assert_eq!(
        lines,
        vec![
            "Singleton Demo:",
            "Pizza Palace",
            "Pizza Palace",
            "true",
            "",
            "Factory Method Demo:",
            "Preparing Margherita Pizza",
            "Preparing Pepperoni Pizza",
            "",
            "Builder Demo:",
            "Hawaiian Pizza: ",
            "Pizza parts: Dough: Thin Crust, Sauce: Tomato, Toppings: Ham, Pineapple",
        ]
    );
}

#[test]
fn test_structural_transcript() {
    let lines = run_demo(structural::run, &PizzeriaConfig::default());

    assert_eq!(
        lines,
        vec![
            "Adapter Example: Pizza is ready!",
            "Decorator Example: Plain Pizza with cheese with mushrooms",
            "Facade Example: Dough is ready! Toppings are added!",
        ]
    );
}

#[test]
fn test_behavioral_transcript() {
    let lines = run_demo(behavioral::run, &PizzeriaConfig::default());

    assert_eq!(
        lines,
        vec![
            "Customer John: Order status updated to: Preparing",
            "Customer Alice: Order status updated to: Preparing",
            "Customer John: Order status updated to: Ready for pickup",
            "Customer Alice: Order status updated to: Ready for pickup",
            "Price with no discount: 10.0",
            "Price with seasonal discount: 9.0",
            "Price with member discount: 8.0",
            "Preparing the pizza.",
            "Baking the pizza.",
            "Packing the pizza.",
        ]
    );
}

#[test]
fn test_singleton_ignores_rival_name_from_config() {
    let config = PizzeriaConfig::new()
        .with_pizzeria_name("Slice House")
        .with_rival_name("Crust Castle");
    let lines = run_demo(creational::run, &config);

    assert_eq!(&lines[1..4], ["Slice House", "Slice House", "true"]);
}

#[test]
fn test_configured_menu_and_discounts_drive_demos() {
    let config = PizzeriaConfig::new()
        .with_menu(vec![PizzaKind::Pepperoni])
        .with_base_price(20.0)
        .with_discounts(vec![DiscountKind::Member])
        .with_customers(Vec::<String>::new());

    let creational_lines = run_demo(creational::run, &config);
    assert_eq!(creational_lines[6], "Preparing Pepperoni Pizza");
    assert_eq!(creational_lines[7], "");

    let behavioral_lines = run_demo(behavioral::run, &config);
    assert_eq!(behavioral_lines[0], "Price with member discount: 16.0");
    assert_eq!(behavioral_lines.len(), 4);
}

#[test]
fn test_large_price_prints_in_plain_decimal() {
    let config = PizzeriaConfig::new()
        .with_base_price(10_000_000.0)
        .with_discounts(vec![DiscountKind::None])
        .with_customers(Vec::<String>::new());

    let lines = run_demo(behavioral::run, &config);
    assert_eq!(lines[0], "Price with no discount: 10000000.0");
}

struct Counter {
    hits: Cell<usize>,
}

impl StatusListener for Counter {
    fn update(&self, _status: &str) {
        self.hits.set(self.hits.get() + 1);
    }
}

#[test]
fn test_each_listener_updated_once_per_status() {
    let first = Rc::new(Counter { hits: Cell::new(0) });
    let second = Rc::new(Counter { hits: Cell::new(0) });

    let order = OrderStatus::new();
    order.attach(first.clone());
    order.attach(second.clone());

    order.set_status("Preparing");
    order.set_status("Ready for pickup");

    assert_eq!(first.hits.get(), 2);
    assert_eq!(second.hits.get(), 2);
}
