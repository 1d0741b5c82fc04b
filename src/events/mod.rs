use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events published by the ledger services. Consumers are read-models
/// (approvals list, finance view); delivery is fire-and-forget and a
/// consumer that misses an event recovers by re-fetching current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Fabric cut events
    FabricCutsGenerated {
        warp_id: Uuid,
        cut_count: usize,
    },
    InspectionRecorded {
        fabric_cut_id: Uuid,
        fabric_number: String,
    },

    // Movement events
    MovementCreated(Uuid),
    MovementReceived(Uuid),

    // Processing events
    ProcessingOrderSent {
        processing_order_id: Uuid,
        order_form_number: String,
    },
    ProcessingDeliveryReceived {
        processing_order_id: Uuid,
        delivery_seq: i32,
    },
    ProcessingDeliveryEdited {
        processing_order_id: Uuid,
        delivery_seq: i32,
    },
    ProcessingDeliveryDeleted {
        processing_order_id: Uuid,
        delivery_seq: i32,
    },

    /// Published on invoice approval, rejection, payment, and deletion so
    /// independent views can refresh.
    InvoiceStatusChanged {
        invoice_id: Uuid,
        warp_id: Uuid,
        new_status: String,
    },
    InvoiceSubmitted {
        invoice_id: Uuid,
        warp_id: Uuid,
    },

    /// Generic event for custom messages.
    Generic {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Fire-and-forget publish: a full or closed channel is logged and
    /// swallowed so notification failures never fail the transaction that
    /// produced them.
    pub fn publish(&self, event: Event) {
        if let Err(e) = self.sender.try_send(event) {
            warn!("Dropping event, channel unavailable: {}", e);
        }
    }
}

/// Creates the event channel with the given capacity.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

/// Consumes events off the channel and logs them. Interested read-models
/// subscribe by extending the match; there is no durable delivery.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::InvoiceStatusChanged {
                invoice_id,
                warp_id,
                new_status,
            } => {
                info!(
                    %invoice_id,
                    %warp_id,
                    %new_status,
                    "wage invoice status changed"
                );
            }
            Event::ProcessingDeliveryReceived {
                processing_order_id,
                delivery_seq,
            } => {
                info!(
                    %processing_order_id,
                    delivery_seq,
                    "processing delivery received"
                );
            }
            other => {
                info!("Received event: {:?}", other);
            }
        }
    }

    info!("Event processing loop stopped");
}
