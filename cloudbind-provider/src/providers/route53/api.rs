use async_trait::async_trait;

use crate::error::Result;

use super::types::{Change, NewZone, Zone, ZoneAndNameServers, ZoneList};

/// Route 53 hosted zone operations.
///
/// Zone and change ids are accepted and returned without their `/hostedzone/` and
/// `/change/` prefixes.
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    /// One page of zones, starting after `marker`.
    async fn list_zones(&self, marker: Option<&str>) -> Result<ZoneList>;

    /// Every zone, following `NextMarker` until the listing is exhausted.
    async fn list_all_zones(&self) -> Result<Vec<Zone>> {
        let mut zones = Vec::new();
        let mut marker: Option<String> = None;
        loop {
            let page = self.list_zones(marker.as_deref()).await?;
            zones.extend(page.zones);
            match page.next_marker {
                Some(next) if page.is_truncated => marker = Some(next),
                _ => break,
            }
        }
        Ok(zones)
    }

    /// The zone and its delegation set.
    async fn get_zone(&self, id: &str) -> Result<Option<ZoneAndNameServers>>;

    /// Create a zone for `name`.
    ///
    /// `caller_reference` makes the request idempotent; a random UUID is used when it is
    /// `None`.
    async fn create_zone(
        &self,
        name: &str,
        caller_reference: Option<&str>,
        comment: Option<&str>,
    ) -> Result<NewZone>;

    /// Delete an empty zone; `None` when the zone does not exist.
    async fn delete_zone(&self, id: &str) -> Result<Option<Change>>;

    async fn get_change(&self, id: &str) -> Result<Option<Change>>;
}
