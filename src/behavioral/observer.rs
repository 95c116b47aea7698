use crate::core::errors::{PizzeriaError, Result};
use crate::core::transcript::Transcript;
use crate::core::types::ListenerId;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives every status change of an order it is attached to
pub trait StatusListener {
    fn update(&self, status: &str);
}

/// Subject holding the current order status and its listeners.
///
/// Listeners are notified synchronously, in attachment order, every time
/// the status is set. Each notification pass walks a snapshot of the
/// listener list taken when the pass starts, so listeners may attach or
/// detach (themselves included) from inside `update`:
/// - a listener attached during a pass is first notified on the next pass
/// - a listener detached during a pass is still notified in that pass if it
///   was attached when the pass started
#[derive(Default)]
pub struct OrderStatus {
    listeners: RefCell<Vec<(ListenerId, Rc<dyn StatusListener>)>>,
    status: RefCell<Option<String>>,
}

impl OrderStatus {
    /// Create a subject with no listeners and no status yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener and return the ID needed to detach it
    pub fn attach(&self, listener: Rc<dyn StatusListener>) -> ListenerId {
        let id = ListenerId::new();
        debug!("Attaching listener {}", id);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Detach a previously attached listener
    ///
    /// # Returns
    /// The detached listener, or `ListenerNotAttached` if `id` is unknown
    pub fn detach(&self, id: ListenerId) -> Result<Rc<dyn StatusListener>> {
        let mut listeners = self.listeners.borrow_mut();
        let position = listeners
            .iter()
            .position(|(listener_id, _)| *listener_id == id)
            .ok_or(PizzeriaError::ListenerNotAttached(id))?;

        debug!("Detaching listener {}", id);
        Ok(listeners.remove(position).1)
    }

    /// Update the status and notify every attached listener
    pub fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        *self.status.borrow_mut() = Some(status.clone());
        self.notify_listeners(&status);
    }

    /// Current status, `None` before the first update
    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify_listeners(&self, status: &str) {
        // The borrow ends with this statement; listeners may re-enter the subject.
        let snapshot: Vec<Rc<dyn StatusListener>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        debug!("Notifying {} listeners of status '{}'", snapshot.len(), status);
        for listener in snapshot {
            listener.update(status);
        }
    }
}

/// A customer waiting for their order, reporting updates to the transcript
pub struct Customer {
    name: String,
    transcript: Transcript,
}

impl Customer {
    /// Create a customer writing its updates to `transcript`
    ///
    /// # Arguments
    /// * `name` - Name shown in each update line
    /// * `transcript` - Where update lines are written
    pub fn new(name: impl Into<String>, transcript: Transcript) -> Self {
        Self {
            name: name.into(),
            transcript,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl StatusListener for Customer {
    fn update(&self, status: &str) {
        self.transcript.line(format!(
            "Customer {}: Order status updated to: {}",
            self.name, status
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records (tag, status) pairs into a shared log
    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<(&'static str, String)>>>,
    }

    impl StatusListener for Recorder {
        fn update(&self, status: &str) {
            self.log.borrow_mut().push((self.tag, status.to_string()));
        }
    }

    fn recorder(tag: &'static str, log: &Rc<RefCell<Vec<(&'static str, String)>>>) -> Rc<dyn StatusListener> {
        Rc::new(Recorder {
            tag,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_listeners_notified_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let order = OrderStatus::new();
        order.attach(recorder("first", &log));
        order.attach(recorder("second", &log));

        order.set_status("Preparing");
        order.set_status("Ready for pickup");

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", "Preparing".to_string()),
                ("second", "Preparing".to_string()),
                ("first", "Ready for pickup".to_string()),
                ("second", "Ready for pickup".to_string()),
            ]
        );
        assert_eq!(order.status().as_deref(), Some("Ready for pickup"));
    }

    #[test]
    fn test_detached_listener_is_not_notified() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let order = OrderStatus::new();
        let first = order.attach(recorder("first", &log));
        order.attach(recorder("second", &log));

        order.detach(first).unwrap();
        order.set_status("Baking");

        assert_eq!(*log.borrow(), vec![("second", "Baking".to_string())]);
        assert_eq!(order.listener_count(), 1);
    }

    #[test]
    fn test_detach_unknown_listener_fails() {
        let order = OrderStatus::new();
        let id = ListenerId::new();

        assert_eq!(order.detach(id).err(), Some(PizzeriaError::ListenerNotAttached(id)));
    }

    #[test]
    fn test_detach_twice_fails() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let order = OrderStatus::new();
        let id = order.attach(recorder("only", &log));

        assert!(order.detach(id).is_ok());
        assert!(order.detach(id).is_err());
    }

    #[test]
    fn test_same_listener_attached_twice_gets_two_updates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listener = recorder("dup", &log);
        let order = OrderStatus::new();
        let first = order.attach(Rc::clone(&listener));
        let second = order.attach(listener);
        assert_ne!(first, second);

        order.set_status("Preparing");
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_status_starts_unset() {
        let order = OrderStatus::new();
        assert_eq!(order.status(), None);
        assert_eq!(order.listener_count(), 0);
    }

    #[test]
    fn test_customer_writes_transcript_line() {
        let transcript = Transcript::recording();
        let order = OrderStatus::new();
        order.attach(Rc::new(Customer::new("John", transcript.clone())));

        order.set_status("Preparing");

        assert_eq!(
            transcript.lines(),
            vec!["Customer John: Order status updated to: Preparing"]
        );
    }

    /// Detaches itself from the subject on its first update
    struct LeaveAfterFirst {
        subject: std::rc::Weak<OrderStatus>,
        id: std::cell::Cell<Option<ListenerId>>,
        seen: RefCell<Vec<String>>,
    }

    impl StatusListener for LeaveAfterFirst {
        fn update(&self, status: &str) {
            self.seen.borrow_mut().push(status.to_string());
            if let (Some(subject), Some(id)) = (self.subject.upgrade(), self.id.take()) {
                subject.detach(id).unwrap();
            }
        }
    }

    #[test]
    fn test_listener_detaching_itself_mid_pass() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let order = Rc::new(OrderStatus::new());
        let leaver = Rc::new(LeaveAfterFirst {
            subject: Rc::downgrade(&order),
            id: std::cell::Cell::new(None),
            seen: RefCell::new(Vec::new()),
        });
        let leaver_id = order.attach(leaver.clone());
        leaver.id.set(Some(leaver_id));
        order.attach(recorder("stays", &log));

        order.set_status("Preparing");
        assert_eq!(*leaver.seen.borrow(), vec!["Preparing"]);
        assert_eq!(*log.borrow(), vec![("stays", "Preparing".to_string())]);
        assert_eq!(order.listener_count(), 1);

        order.set_status("Ready for pickup");
        assert_eq!(*leaver.seen.borrow(), vec!["Preparing"]);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_listener_detached_by_earlier_listener_still_notified_in_pass() {
        struct DetachOther {
            subject: std::rc::Weak<OrderStatus>,
            target: std::cell::Cell<Option<ListenerId>>,
        }

        impl StatusListener for DetachOther {
            fn update(&self, _status: &str) {
                if let (Some(subject), Some(id)) = (self.subject.upgrade(), self.target.take()) {
                    subject.detach(id).unwrap();
                }
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let order = Rc::new(OrderStatus::new());
        let detacher = Rc::new(DetachOther {
            subject: Rc::downgrade(&order),
            target: std::cell::Cell::new(None),
        });
        order.attach(detacher.clone());
        let victim = order.attach(recorder("victim", &log));
        detacher.target.set(Some(victim));

        order.set_status("Preparing");
        order.set_status("Baking");

        assert_eq!(*log.borrow(), vec![("victim", "Preparing".to_string())]);
    }

    /// Attaches a new listener on every update
    struct Recruiter {
        subject: std::rc::Weak<OrderStatus>,
        log: Rc<RefCell<Vec<(&'static str, String)>>>,
    }

    impl StatusListener for Recruiter {
        fn update(&self, _status: &str) {
            if let Some(subject) = self.subject.upgrade() {
                subject.attach(recorder("late", &self.log));
            }
        }
    }

    #[test]
    fn test_listener_attached_mid_pass_waits_for_next_update() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let order = Rc::new(OrderStatus::new());
        order.attach(Rc::new(Recruiter {
            subject: Rc::downgrade(&order),
            log: Rc::clone(&log),
        }));

        order.set_status("Preparing");
        assert!(log.borrow().is_empty());
        assert_eq!(order.listener_count(), 2);

        order.set_status("Ready for pickup");
        assert_eq!(*log.borrow(), vec![("late", "Ready for pickup".to_string())]);
        assert_eq!(order.listener_count(), 3);
    }

    #[test]
    fn test_customer_keeps_its_name() {
        let customer = Customer::new("Alice", Transcript::recording());
        assert_eq!(customer.name(), "Alice");
    }
}
