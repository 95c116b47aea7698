pub mod command;
pub mod observer;
pub mod strategy;

pub use command::{BakeCommand, Command, Invoker, OrderStep, PackCommand, PizzaOrder, PrepareCommand};
pub use observer::{Customer, OrderStatus, StatusListener};
pub use strategy::{DiscountKind, MemberDiscount, NoDiscount, Pizza, PricingStrategy, SeasonalDiscount};
