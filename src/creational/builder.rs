use log::debug;

/// Ordered list of the parts a pizza was assembled from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PizzaProduct {
    parts: Vec<String>,
}

impl PizzaProduct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render the parts as a single `Pizza parts: a, b, c` line
    pub fn list_parts(&self) -> String {
        format!("Pizza parts: {}", self.parts.join(", "))
    }
}

/// Step-wise pizza assembly.
///
/// Each step appends one part to the product under construction.
/// `get_product` hands the accumulated product over and leaves the builder
/// empty, ready for the next pizza.
pub trait PizzaBuilder {
    fn add_base(&mut self);
    fn add_sauce(&mut self);
    fn add_toppings(&mut self);
    fn get_product(&mut self) -> PizzaProduct;
}

#[derive(Debug, Default)]
pub struct HawaiianPizzaBuilder {
    product: PizzaProduct,
}

impl HawaiianPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn add_base(&mut self) {
        self.product.add("Dough: Thin Crust");
    }

    fn add_sauce(&mut self) {
        self.product.add("Sauce: Tomato");
    }

    fn add_toppings(&mut self) {
        self.product.add("Toppings: Ham, Pineapple");
    }

    fn get_product(&mut self) -> PizzaProduct {
        std::mem::take(&mut self.product)
    }
}

/// Runs the fixed base → sauce → toppings sequence on its builder
#[derive(Debug)]
pub struct Director<B: PizzaBuilder> {
    builder: B,
}

impl<B: PizzaBuilder> Director<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Replace the builder, returning the previous one
    pub fn set_builder(&mut self, builder: B) -> B {
        std::mem::replace(&mut self.builder, builder)
    }

    pub fn build_hawaiian_pizza(&mut self) {
        debug!("Director building pizza with {}", std::any::type_name::<B>());
        self.builder.add_base();
        self.builder.add_sauce();
        self.builder.add_toppings();
    }

    /// Take the finished product from the builder
    pub fn product(&mut self) -> PizzaProduct {
        self.builder.get_product()
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn into_builder(self) -> B {
        self.builder
    }
}
