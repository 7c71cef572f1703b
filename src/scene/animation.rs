//! Per-frame animation callbacks.
//!
//! Callbacks run synchronously once per tick in insertion order. A failing
//! callback is logged and skipped for that frame; the rest still run.
//! A panicking callback counts as a failure with the panic message.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::HandOrbitError;

/// A per-frame callback. Receives the frame delta in seconds.
pub type AnimationFn = Box<dyn FnMut(f32) -> Result<(), String>>;

/// Ordered, named collection of [`AnimationFn`]s.
#[derive(Default)]
pub struct AnimationCallbacks {
    entries: Vec<(String, AnimationFn)>,
    next_id: u64,
}

impl AnimationCallbacks {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback. Without a name one is generated (`anim_<n>`).
    /// Re-using a name replaces that callback in place.
    pub fn add<F>(&mut self, name: Option<&str>, callback: F) -> String
    where
        F: FnMut(f32) -> Result<(), String> + 'static,
    {
        self.next_id += 1;
        let name = name.map_or_else(
            || format!("anim_{}", self.next_id),
            ToOwned::to_owned,
        );
        let callback: AnimationFn = Box::new(callback);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = callback,
            None => self.entries.push((name.clone(), callback)),
        }
        name
    }

    /// Remove a callback by name. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        self.entries.len() != before
    }

    /// Drop every callback.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callback is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Run every callback once. Failures are logged and returned.
    pub fn tick(&mut self, dt: f32) -> Vec<HandOrbitError> {
        let mut failures = Vec::new();
        for (name, callback) in &mut self.entries {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(dt)))
                .unwrap_or_else(|payload| Err(panic_message(payload.as_ref())));
            if let Err(message) = outcome {
                log::warn!("animation '{name}' failed: {message}");
                failures.push(HandOrbitError::Animation {
                    name: name.clone(),
                    message,
                });
            }
        }
        failures
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown payload".to_owned());
    format!("panicked: {detail}")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn callbacks_run_in_order_with_delta() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut anims = AnimationCallbacks::new();
        for label in ["spin", "bob"] {
            let log = Rc::clone(&log);
            let _ = anims.add(Some(label), move |dt| {
                log.borrow_mut().push((label, dt));
                Ok(())
            });
        }
        assert!(anims.tick(0.016).is_empty());
        assert_eq!(*log.borrow(), vec![("spin", 0.016), ("bob", 0.016)]);
    }

    #[test]
    fn failure_does_not_stop_later_callbacks() {
        let ran = Rc::new(RefCell::new(0));
        let mut anims = AnimationCallbacks::new();
        let _ = anims.add(Some("broken"), |_| Err("no target".to_owned()));
        let counter = Rc::clone(&ran);
        let _ = anims.add(None, move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        let failures = anims.tick(0.1);
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            HandOrbitError::Animation { name, .. } if name == "broken"
        ));
        let _ = anims.tick(0.1);
        assert_eq!(*ran.borrow(), 2);
    }

    #[test]
    #[allow(clippy::panic)]
    fn panicking_callback_is_reported_and_skipped() {
        let ran = Rc::new(RefCell::new(false));
        let mut anims = AnimationCallbacks::new();
        let _ = anims.add(Some("explodes"), |_| panic!("lost the mesh"));
        let flag = Rc::clone(&ran);
        let _ = anims.add(Some("after"), move |_| {
            *flag.borrow_mut() = true;
            Ok(())
        });

        let failures = anims.tick(0.016);
        assert!(*ran.borrow());
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            HandOrbitError::Animation { name, message }
                if name == "explodes" && message.contains("lost the mesh")
        ));
        // still registered, and still guarded next frame
        assert_eq!(anims.len(), 2);
        assert_eq!(anims.tick(0.016).len(), 1);
    }

    #[test]
    fn generated_names_and_removal() {
        let mut anims = AnimationCallbacks::new();
        let a = anims.add(None, |_| Ok(()));
        let b = anims.add(None, |_| Ok(()));
        assert_ne!(a, b);
        assert!(a.starts_with("anim_"));
        assert!(anims.remove(&a));
        assert!(!anims.remove(&a));
        assert_eq!(anims.names().collect::<Vec<_>>(), vec![b.as_str()]);
        anims.clear();
        assert!(anims.is_empty());
    }

    #[test]
    fn reusing_a_name_replaces_in_place() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut anims = AnimationCallbacks::new();
        for (name, tag) in [("a", 1), ("b", 2), ("a", 3)] {
            let hits = Rc::clone(&hits);
            let _ = anims.add(Some(name), move |_| {
                hits.borrow_mut().push(tag);
                Ok(())
            });
        }
        assert_eq!(anims.len(), 2);
        let _ = anims.tick(0.0);
        assert_eq!(*hits.borrow(), vec![3, 2]);
    }
}
