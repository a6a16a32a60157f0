/*
 * This file is part of insteon-fan.
 *
 * Copyright (C) 2026 insteon-fan contributors
 *
 * insteon-fan is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * insteon-fan is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with insteon-fan. If not, see <https://www.gnu.org/licenses/>.
 */

//! In-process dispatcher signals.
//!
//! The hub's publish/subscribe primitive, keyed by signal name. The platform
//! uses it to receive add-entities notifications after setup has completed.
//! A subscription ends when its receiver is dropped; dead senders are pruned
//! on the next send for that signal.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

/// Dispatcher carrying payloads of type `T`. Cloning shares the registry.
#[derive(Clone)]
pub struct Dispatcher<T> {
    inner: Arc<Mutex<HashMap<String, Vec<mpsc::UnboundedSender<T>>>>>,
}

impl<T> Default for Dispatcher<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<T: Clone> Dispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a signal name.
    pub fn connect(&self, signal: &str) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner
            .lock()
            .entry(signal.to_string())
            .or_default()
            .push(tx);
        debug!(signal, "dispatcher subscription added");
        rx
    }

    /// Deliver a payload to every live subscriber of the signal.
    pub fn send(&self, signal: &str, payload: T) {
        let mut registry = self.inner.lock();
        if let Some(senders) = registry.get_mut(signal) {
            senders.retain(|tx| tx.send(payload.clone()).is_ok());
            if senders.is_empty() {
                registry.remove(signal);
            }
        }
    }

    /// Number of live subscriptions for a signal.
    pub fn subscriber_count(&self, signal: &str) -> usize {
        self.inner.lock().get(signal).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_reaches_subscriber() {
        let dispatcher: Dispatcher<u32> = Dispatcher::new();
        let mut rx = dispatcher.connect("sig");
        dispatcher.send("sig", 7);
        assert_eq!(rx.recv().await, Some(7));
    }

    #[tokio::test]
    async fn test_signals_are_isolated() {
        let dispatcher: Dispatcher<u32> = Dispatcher::new();
        let mut rx_a = dispatcher.connect("a");
        let mut rx_b = dispatcher.connect("b");
        dispatcher.send("a", 1);
        assert_eq!(rx_a.recv().await, Some(1));
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_pruned() {
        let dispatcher: Dispatcher<u32> = Dispatcher::new();
        let rx = dispatcher.connect("sig");
        assert_eq!(dispatcher.subscriber_count("sig"), 1);
        drop(rx);
        dispatcher.send("sig", 1);
        assert_eq!(dispatcher.subscriber_count("sig"), 0);
    }
}
