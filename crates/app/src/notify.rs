//! Notification dispatch.

use till::cart::CartEvent;
use tracing::info;

/// Render a cart event as a user-facing notification.
///
/// Cart mutations are pure transitions that hand back event descriptors; this
/// dispatcher is the one place that turns them into output, so the cart stays
/// testable without a UI harness. The output here is a `tracing` event for
/// the embedding UI to subscribe to and render as a toast.
pub fn dispatch(event: &CartEvent) {
    match event {
        CartEvent::ItemAdded { name } => info!(item = %name, "Added to cart"),
        CartEvent::ItemRemoved { name } => info!(item = %name, "Removed from cart"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_accepts_every_event_shape() {
        dispatch(&CartEvent::ItemAdded {
            name: "Espresso".to_owned(),
        });
        dispatch(&CartEvent::ItemRemoved {
            name: "Espresso".to_owned(),
        });
    }
}
