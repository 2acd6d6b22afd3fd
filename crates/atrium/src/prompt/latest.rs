//! A single-slot, latest-value-wins handoff between two threads.
//!
//! Unlike an `mpsc` channel there is no queue: each `send` overwrites the
//! previous value, and the reader sees whatever was written most recently.
//! That is all a per-frame consumer needs from a console prompt.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    sender_alive: bool,
    receiver_alive: bool,
}

#[derive(Debug)]
struct Shared<T> {
    slot: Mutex<Slot<T>>,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // A panic while holding the lock can't leave the slot half-written.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Writing half. Dropping it marks the channel disconnected.
#[derive(Debug)]
pub struct LatestSender<T> {
    shared: Arc<Shared<T>>,
}

/// Reading half. Dropping it marks the channel closed; further sends fail.
#[derive(Debug)]
pub struct LatestReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Create a connected sender/receiver pair with an empty slot.
pub fn channel<T>() -> (LatestSender<T>, LatestReceiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot {
            value: None,
            sender_alive: true,
            receiver_alive: true,
        }),
    });
    (
        LatestSender {
            shared: Arc::clone(&shared),
        },
        LatestReceiver { shared },
    )
}

impl<T> LatestSender<T> {
    /// Overwrite the slot. Returns the value back if the receiver is gone.
    pub fn send(&self, value: T) -> Result<(), T> {
        let mut slot = self.shared.lock();
        if !slot.receiver_alive {
            return Err(value);
        }
        slot.value = Some(value);
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        !self.shared.lock().receiver_alive
    }
}

impl<T> Drop for LatestSender<T> {
    fn drop(&mut self) {
        self.shared.lock().sender_alive = false;
    }
}

impl<T> LatestReceiver<T> {
    /// Take the value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.shared.lock().value.take()
    }

    /// True once the sender has been dropped. A value sent before that
    /// is still readable.
    pub fn is_disconnected(&self) -> bool {
        !self.shared.lock().sender_alive
    }
}

impl<T: Clone> LatestReceiver<T> {
    /// The most recent value, left in place.
    pub fn latest(&self) -> Option<T> {
        self.shared.lock().value.clone()
    }
}

impl<T> Drop for LatestReceiver<T> {
    fn drop(&mut self) {
        self.shared.lock().receiver_alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let (tx, rx) = channel();
        assert_eq!(rx.latest(), None);
        tx.send(1.0).unwrap();
        tx.send(2.5).unwrap();
        assert_eq!(rx.latest(), Some(2.5));
        assert_eq!(rx.latest(), Some(2.5), "latest does not consume");
        assert_eq!(rx.take(), Some(2.5));
        assert_eq!(rx.take(), None);
    }

    #[test]
    fn send_fails_after_receiver_drops() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(tx.is_closed());
        assert_eq!(tx.send(3), Err(3));
    }

    #[test]
    fn value_survives_sender_drop() {
        let (tx, rx) = channel();
        tx.send("hi").unwrap();
        drop(tx);
        assert!(rx.is_disconnected());
        assert_eq!(rx.latest(), Some("hi"));
    }

    #[test]
    fn works_across_threads() {
        let (tx, rx) = channel();
        let handle = std::thread::spawn(move || {
            for v in 1..=100 {
                tx.send(v).unwrap();
            }
        });
        handle.join().unwrap();
        assert_eq!(rx.latest(), Some(100));
        assert!(rx.is_disconnected());
    }
}
