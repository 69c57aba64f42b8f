//! Contact sync service - pushes storefront contacts to the member list

use responsys_domain::constants::MAX_IDS_PER_CALL;
use responsys_domain::{InteractObject, Locator, MergeRule, Record, ResponsysConfig, Result};
use tracing::{info, instrument};

use super::mapper::{ContactMapper, LocalContact};
use crate::client::ResponsysClient;
use crate::transport_ports::Transport;

/// Totals of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Integration was disabled; nothing was sent.
    pub skipped: bool,
    pub contacts: usize,
    pub inserted: u64,
    pub updated: u64,
    pub rejected: u64,
    pub welcomed: usize,
    pub welcome_failures: usize,
}

/// Contact sync service
pub struct ContactSyncService {
    enabled: bool,
    mapper: ContactMapper,
    member_list: Locator,
    welcome_list: Locator,
    welcome_event: String,
}

impl ContactSyncService {
    /// Build the service from connector configuration.
    pub fn new(config: &ResponsysConfig) -> Self {
        Self {
            enabled: config.enabled,
            mapper: ContactMapper::new(config.mapping.clone()),
            member_list: config.locator(InteractObject::Member).clone(),
            welcome_list: config.locator(InteractObject::Welcome).clone(),
            welcome_event: config.welcome_event.clone(),
        }
    }

    pub fn mapper(&self) -> &ContactMapper {
        &self.mapper
    }

    /// Merge `contacts` into the member list, then raise the welcome event
    /// for the flagged ones that have an email address.
    ///
    /// Work is split into calls of at most 200 items. The first failing
    /// call aborts the run.
    #[instrument(skip_all, fields(contacts = contacts.len()))]
    pub fn sync<T: Transport>(
        &self,
        client: &mut ResponsysClient<T>,
        contacts: &[LocalContact],
    ) -> Result<SyncReport> {
        if !self.enabled {
            info!("Responsys integration disabled, skipping contact sync");
            return Ok(SyncReport { skipped: true, contacts: contacts.len(), ..SyncReport::default() });
        }

        let rule = MergeRule::matching(self.mapper.match_column()?);
        let mut report = SyncReport { contacts: contacts.len(), ..SyncReport::default() };

        for chunk in contacts.chunks(MAX_IDS_PER_CALL) {
            let records: Vec<Record> =
                chunk.iter().map(|contact| self.mapper.to_record(contact)).collect();
            let merged = client.merge_list_members(&self.member_list, &records, &rule)?;

            report.inserted += merged.insert_count;
            report.updated += merged.update_count;
            report.rejected += merged.rejected_count;
        }

        let emails: Vec<String> = contacts
            .iter()
            .filter(|contact| contact.welcome)
            .filter_map(|contact| self.mapper.email_of(contact))
            .map(str::to_string)
            .collect();

        for chunk in emails.chunks(MAX_IDS_PER_CALL) {
            let results =
                client.trigger_custom_event(&self.welcome_list, &self.welcome_event, chunk)?;
            let succeeded = results.iter().filter(|result| result.success).count();

            report.welcomed += succeeded;
            report.welcome_failures += results.len() - succeeded;
        }

        info!(
            inserted = report.inserted,
            updated = report.updated,
            rejected = report.rejected,
            welcomed = report.welcomed,
            "Contact sync finished"
        );
        Ok(report)
    }
}
