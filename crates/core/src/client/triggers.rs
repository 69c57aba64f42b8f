use responsys_domain::types::requests::{
    CustomEvent, TriggerCampaignMessageRequest, TriggerCustomEventRequest,
};
use responsys_domain::{
    Locator, OptionalData, Recipient, RecipientData, RecipientIdType, Result, TriggerResult,
};
use tracing::info;

use super::gateway::{decode_list, Operation};
use super::ResponsysClient;
use crate::transport_ports::Transport;

impl<T: Transport> ResponsysClient<T> {
    /// Send `campaign` to the members of `list` identified by `ids`.
    ///
    /// Every recipient gets the same `optional_data`. Results come back per
    /// recipient.
    pub fn trigger_campaign_message(
        &mut self,
        campaign: &Locator,
        list: &Locator,
        ids: &[String],
        id_type: RecipientIdType,
        optional_data: &[OptionalData],
    ) -> Result<Vec<TriggerResult>> {
        let recipient_data = ids
            .iter()
            .map(|id| RecipientData {
                recipient: recipient(list, id, id_type),
                optional_data: Some(optional_data.to_vec()),
            })
            .collect();

        let request = TriggerCampaignMessageRequest { campaign, recipient_data };
        let response = self.invoke(Operation::TriggerCampaignMessage, &request)?;
        let results: Vec<TriggerResult> = decode_list(Operation::TriggerCampaignMessage, response)?;

        info!(
            campaign = %campaign,
            recipients = ids.len(),
            succeeded = results.iter().filter(|r| r.success).count(),
            "Triggered campaign message"
        );
        Ok(results)
    }

    /// Raise the custom event `event_name` for members of `list`, addressed
    /// by email.
    pub fn trigger_custom_event(
        &mut self,
        list: &Locator,
        event_name: &str,
        emails: &[String],
    ) -> Result<Vec<TriggerResult>> {
        let recipient_data = emails
            .iter()
            .map(|email| RecipientData {
                recipient: recipient(list, email, RecipientIdType::EmailAddress),
                optional_data: None,
            })
            .collect();

        let request =
            TriggerCustomEventRequest { custom_event: CustomEvent { event_name }, recipient_data };
        let response = self.invoke(Operation::TriggerCustomEvent, &request)?;
        let results: Vec<TriggerResult> = decode_list(Operation::TriggerCustomEvent, response)?;

        info!(
            event = event_name,
            recipients = emails.len(),
            succeeded = results.iter().filter(|r| r.success).count(),
            "Triggered custom event"
        );
        Ok(results)
    }
}

fn recipient(list: &Locator, id: &str, id_type: RecipientIdType) -> Recipient {
    let (recipient_id, email_address) = match id_type {
        RecipientIdType::Riid => (Some(id.to_string()), None),
        RecipientIdType::EmailAddress => (None, Some(id.to_string())),
    };
    Recipient { list_name: list.clone(), recipient_id, email_address }
}
