//! Configuration for the pizzeria demonstrations
//!
//! Every hard-coded input the demo drivers use lives here, so a test or an
//! alternative driver can swap names or prices without touching
//! the pattern code.
use crate::behavioral::strategy::DiscountKind;
use crate::creational::factory::PizzaKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PizzeriaConfig {
    /// Name the singleton registry is first created with
    pub pizzeria_name: String,
    /// Name passed on the second registry lookup; the registry ignores it
    pub rival_name: String,
    /// Base price fed to every pricing strategy
    pub base_price: f64,
    /// Customers subscribed to the order status, in attachment order
    pub customers: Vec<String>,
    /// Status values pushed to the customers, in order
    pub status_updates: Vec<String>,
    /// Pricing strategies applied one after another
    pub discounts: Vec<DiscountKind>,
    /// Pizzas produced through their factories
    pub menu: Vec<PizzaKind>,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            pizzeria_name: "Pizza Palace".to_string(),
            rival_name: "Pizza Kingdom".to_string(),
            base_price: 10.0,
            customers: vec!["John".to_string(), "Alice".to_string()],
            status_updates: vec!["Preparing".to_string(), "Ready for pickup".to_string()],
            discounts: vec![DiscountKind::None, DiscountKind::Seasonal, DiscountKind::Member],
            menu: vec![PizzaKind::Margherita, PizzaKind::Pepperoni],
        }
    }
}

impl PizzeriaConfig {
    /// Create a configuration holding the default demo inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name the pizzeria registry is created with
    ///
    /// # Arguments
    /// * `name` - Name used on the first registry lookup
    ///
    /// # Returns
    /// The configuration with the new pizzeria name
    pub fn with_pizzeria_name(mut self, name: impl Into<String>) -> Self {
        self.pizzeria_name = name.into();
        self
    }

    /// Set the name passed on the second registry lookup
    ///
    /// # Returns
    /// The configuration with the new rival name
    pub fn with_rival_name(mut self, name: impl Into<String>) -> Self {
        self.rival_name = name.into();
        self
    }

    /// Set the base price fed to the pricing strategies
    ///
    /// # Arguments
    /// * `price` - Price before any discount
    ///
    /// # Returns
    /// The configuration with the new base price
    pub fn with_base_price(mut self, price: f64) -> Self {
        self.base_price = price;
        self
    }

    /// Replace the customers subscribed to the order status
    ///
    /// # Arguments
    /// * `customers` - Customer names, in attachment order
    ///
    /// # Returns
    /// The configuration with the new customer list
    pub fn with_customers<I, S>(mut self, customers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customers = customers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the status values pushed to the customers
    ///
    /// # Returns
    /// The configuration with the new status sequence
    pub fn with_status_updates<I, S>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_updates = updates.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the pricing strategies applied in the behavioral demo
    ///
    /// # Arguments
    /// * `discounts` - Strategies, applied one after another
    ///
    /// # Returns
    /// The configuration with the new discount sequence
    pub fn with_discounts(mut self, discounts: Vec<DiscountKind>) -> Self {
        self.discounts = discounts;
        self
    }

    /// Replace the pizzas produced through their factories
    ///
    /// # Returns
    /// The configuration with the new menu
    pub fn with_menu(mut self, menu: Vec<PizzaKind>) -> Self {
        self.menu = menu;
        self
    }
}
