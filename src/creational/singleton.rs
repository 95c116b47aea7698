use log::{debug, warn};
use std::rc::Rc;

/// The one pizzeria of the process
#[derive(Debug, PartialEq, Eq)]
pub struct Pizzeria {
    name: String,
}

impl Pizzeria {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Owner of the single `Pizzeria` instance.
///
/// Create one registry at start-up and pass it to whoever needs the
/// pizzeria. The first `get_instance` call creates the pizzeria with the
/// given name; every later call returns that same instance and ignores its
/// argument. The instance lives as long as the registry and is never
/// replaced.
#[derive(Debug, Default)]
pub struct PizzeriaRegistry {
    instance: Option<Rc<Pizzeria>>,
}

impl PizzeriaRegistry {
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Get the pizzeria, creating it with `name` on the first call
    pub fn get_instance(&mut self, name: &str) -> Rc<Pizzeria> {
        match &self.instance {
            Some(existing) => {
                if existing.name != name {
                    warn!(
                        "Pizzeria already exists as '{}', ignoring requested name '{}'",
                        existing.name, name
                    );
                }
                Rc::clone(existing)
            }
            None => {
                debug!("Creating pizzeria '{}'", name);
                let created = Rc::new(Pizzeria {
                    name: name.to_string(),
                });
                self.instance = Some(Rc::clone(&created));
                created
            }
        }
    }

    /// Whether the pizzeria has been created yet
    pub fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }
}
