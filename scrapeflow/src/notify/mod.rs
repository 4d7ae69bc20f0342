//! Outbound notification capability.
//!
//! A [`Notifier`] delivers a text message somewhere a human will see it.
//! Delivery failures are contained at the fan-out site: [`broadcast`] logs
//! them and moves on, so a dead channel never interrupts a run or starves
//! the remaining channels.

mod telegram;

pub use telegram::{TelegramNotifier, DEFAULT_TELEGRAM_API_URL};

use crate::errors::DeliveryError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// An outbound message-delivery capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the notifier's name, used in logs.
    fn name(&self) -> &str;

    /// Delivers a message.
    async fn send(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Sends a message to every notifier, in registration order.
///
/// A delivery failure is logged and does not stop delivery to the
/// remaining notifiers.
pub async fn broadcast(notifiers: &[Arc<dyn Notifier>], message: &str) {
    for notifier in notifiers {
        match notifier.send(message).await {
            Ok(()) => debug!(notifier = notifier.name(), "notification delivered"),
            Err(err) => warn!(
                notifier = notifier.name(),
                error = %err,
                "notification delivery failed; continuing"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::CollectingNotifier;

    #[tokio::test]
    async fn test_broadcast_reaches_all_notifiers() {
        let first = CollectingNotifier::new();
        let second = CollectingNotifier::new();

        let notifiers: Vec<Arc<dyn Notifier>> =
            vec![Arc::new(first.clone()), Arc::new(second.clone())];

        broadcast(&notifiers, "scrape finished").await;

        assert_eq!(first.messages(), vec!["scrape finished"]);
        assert_eq!(second.messages(), vec!["scrape finished"]);
    }

    #[tokio::test]
    async fn test_broadcast_continues_past_failed_delivery() {
        let first = CollectingNotifier::new();
        let second = CollectingNotifier::new();
        second.fail_delivery();
        let third = CollectingNotifier::new();

        let notifiers: Vec<Arc<dyn Notifier>> = vec![
            Arc::new(first.clone()),
            Arc::new(second.clone()),
            Arc::new(third.clone()),
        ];

        broadcast(&notifiers, "msg").await;

        // All three are attempted, in order, despite the middle failure.
        assert_eq!(first.messages(), vec!["msg"]);
        assert_eq!(second.messages(), vec!["msg"]);
        assert_eq!(third.messages(), vec!["msg"]);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_notifiers() {
        let notifiers: Vec<Arc<dyn Notifier>> = Vec::new();
        broadcast(&notifiers, "nobody listens").await;
    }
}
