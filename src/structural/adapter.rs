/// What the order desk expects to call
pub trait OrderInterface {
    fn order_pizza(&self) -> String;
}

/// A kitchen role with its own, incompatible operation
pub trait PizzaMaker {
    fn make_pizza(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PizzaChef;

impl PizzaMaker for PizzaChef {
    fn make_pizza(&self) -> String {
        "Pizza is ready!".to_string()
    }
}

/// Exposes any `PizzaMaker` as an `OrderInterface`, forwarding the result unchanged
#[derive(Debug, Clone)]
pub struct PizzaAdapter<M: PizzaMaker> {
    maker: M,
}

impl<M: PizzaMaker> PizzaAdapter<M> {
    /// Wrap `maker` so it can serve orders
    pub fn new(maker: M) -> Self {
        Self { maker }
    }
}

impl<M: PizzaMaker> OrderInterface for PizzaAdapter<M> {
    fn order_pizza(&self) -> String {
        self.maker.make_pizza()
    }
}
