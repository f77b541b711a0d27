//! Reply sender that prints to stdout.

use async_trait::async_trait;
use relaybot_core::Reply;
use relaybot_error::RelayResult;
use relaybot_interface::ReplySender;
use tracing::{debug, instrument};

/// Writes replies to stdout, one option per line for quick replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

#[async_trait]
impl ReplySender for ConsoleSender {
    #[instrument(skip(self, reply))]
    async fn send(&self, recipient_id: &str, reply: &Reply) -> RelayResult<()> {
        debug!("Printing reply");
        println!("{}", reply);
        Ok(())
    }
}
