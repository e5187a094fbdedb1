//! Message delivery collaborator.
//!
//! The contact form itself never performs I/O; an accepted submission is
//! handed to a [`MessageSink`] chosen by the integrator. The shipped
//! [`LogSink`] only logs the message, which is all the original demo did.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::form::FormValues;

/// Proof that a sink took responsibility for a message.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    /// Name of the sink that handled the message.
    pub sink: &'static str,
    pub delivered_at: DateTime<Utc>,
}

/// Something that can deliver an accepted contact message.
pub trait MessageSink {
    fn send(&self, message: &FormValues) -> Result<DeliveryReceipt>;
}

/// Demo sink: records the message in the log and accepts it unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn send(&self, message: &FormValues) -> Result<DeliveryReceipt> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            message_len = message.message.chars().count(),
            "contact message accepted (demo sink, not transmitted)"
        );
        Ok(DeliveryReceipt {
            sink: "log",
            delivered_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_accepts_any_message() {
        let values = FormValues {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello there, this works.".to_string(),
        };
        let receipt = LogSink.send(&values).unwrap();
        assert_eq!(receipt.sink, "log");
    }
}
