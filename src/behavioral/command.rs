use crate::core::errors::{PizzeriaError, Result};
use crate::core::transcript::Transcript;
use crate::core::types::OrderId;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// A kitchen step performed on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStep {
    Prepare,
    Bake,
    Pack,
}

/// Receiver: the order the kitchen works on
#[derive(Debug)]
pub struct PizzaOrder {
    id: OrderId,
    transcript: Transcript,
    steps: RefCell<Vec<OrderStep>>,
}

impl PizzaOrder {
    /// Create an order with a fresh ID whose steps are written to `transcript`
    pub fn new(transcript: Transcript) -> Self {
        Self {
            id: OrderId::new(),
            transcript,
            steps: RefCell::new(Vec::new()),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn prepare(&self) {
        self.perform(OrderStep::Prepare, "Preparing the pizza.");
    }

    pub fn bake(&self) {
        self.perform(OrderStep::Bake, "Baking the pizza.");
    }

    pub fn pack(&self) {
        self.perform(OrderStep::Pack, "Packing the pizza.");
    }

    /// Steps performed so far, oldest first
    pub fn steps(&self) -> Vec<OrderStep> {
        self.steps.borrow().clone()
    }

    fn perform(&self, step: OrderStep, line: &str) {
        debug!("[Order {}] {:?}", self.id, step);
        self.steps.borrow_mut().push(step);
        self.transcript.line(line);
    }
}

pub trait Command {
    fn execute(&self);
}

pub struct PrepareCommand {
    order: Rc<PizzaOrder>,
}

impl PrepareCommand {
    /// Bind the command to `order`
    pub fn new(order: Rc<PizzaOrder>) -> Self {
        Self { order }
    }
}

impl Command for PrepareCommand {
    fn execute(&self) {
        self.order.prepare();
    }
}

pub struct BakeCommand {
    order: Rc<PizzaOrder>,
}

impl BakeCommand {
    /// Bind the command to `order`
    pub fn new(order: Rc<PizzaOrder>) -> Self {
        Self { order }
    }
}

impl Command for BakeCommand {
    fn execute(&self) {
        self.order.bake();
    }
}

pub struct PackCommand {
    order: Rc<PizzaOrder>,
}

impl PackCommand {
    /// Bind the command to `order`
    pub fn new(order: Rc<PizzaOrder>) -> Self {
        Self { order }
    }
}

impl Command for PackCommand {
    fn execute(&self) {
        self.order.pack();
    }
}

/// Holds at most one command and runs it on demand.
///
/// Setting a new command replaces the previous one; nothing is queued
/// or remembered.
#[derive(Default)]
pub struct Invoker {
    command: Option<Box<dyn Command>>,
}

impl Invoker {
    /// Create an invoker holding no command
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `command`, replacing any previous one
    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// Run the held command
    pub fn execute_command(&self) -> Result<()> {
        let command = self.command.as_ref().ok_or(PizzeriaError::NoCommandSet)?;
        command.execute();
        Ok(())
    }
}
