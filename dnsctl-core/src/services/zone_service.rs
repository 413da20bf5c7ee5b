//! Zone 管理服务

use std::sync::Arc;

use dnsctl_provider::Zone;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Alignment, Table};
use crate::utils::datetime::{format_update_date, today_serial};

/// Zone 管理服务
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    /// 创建 Zone 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Turn a zone name or numeric id into a zone id.
    ///
    /// A purely numeric identifier is taken as the id itself; anything else is looked
    /// up by name and must match exactly one zone.
    pub async fn resolve_zone_id(&self, identifier: &str) -> CoreResult<String> {
        let identifier = identifier.trim();
        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(identifier.to_string());
        }

        let ids = self
            .ctx
            .provider()
            .find_zone_ids(identifier)
            .await
            .map_err(|e| self.ctx.handle_provider_error("find_zone_ids", e))?;

        match ids.as_slice() {
            [] => Err(CoreError::ZoneNotFound(identifier.to_string())),
            [id] => Ok(id.clone()),
            _ => Err(CoreError::AmbiguousZone {
                zone: identifier.to_string(),
                count: ids.len(),
            }),
        }
    }

    /// Create an empty zone with serial `YYYYMMDD01`.
    pub async fn create_zone(&self, name: &str) -> CoreResult<Zone> {
        let serial = today_serial();
        let zone = self
            .ctx
            .provider()
            .create_zone(name, &serial)
            .await
            .map_err(|e| self.ctx.handle_provider_error("create_zone", e))?;
        log::info!("Created zone {} (id {}, serial {serial})", zone.name, zone.id);
        Ok(zone)
    }

    /// Resolve `name` and delete that zone. Returns the deleted zone id.
    ///
    /// An already resolved (numeric) id is deleted without a lookup.
    pub async fn delete_zone(&self, name: &str) -> CoreResult<String> {
        let zone_id = self.resolve_zone_id(name).await?;
        self.ctx
            .provider()
            .delete_zone(&zone_id)
            .await
            .map_err(|e| self.ctx.handle_provider_error("delete_zone", e))?;
        log::info!("Deleted zone {zone_id}");
        Ok(zone_id)
    }

    /// All zones on the account: `id, zone, serial, updated`.
    pub async fn list_zones(&self) -> CoreResult<Table> {
        let zones = self
            .ctx
            .provider()
            .list_zones()
            .await
            .map_err(|e| self.ctx.handle_provider_error("list_zones", e))?;

        let mut table = Table::new(&["id", "zone", "serial", "updated"])
            .with_align("serial", Alignment::Center)
            .with_align("updated", Alignment::Center);
        for zone in zones {
            table.add_row(vec![
                zone.id,
                zone.name,
                zone.serial.unwrap_or_default(),
                format_update_date(zone.update_date.as_ref()),
            ]);
        }
        Ok(table)
    }

    /// The zone in BIND format, as rendered by the API.
    pub async fn dump_zone(&self, name: &str) -> CoreResult<String> {
        let zone_id = self.resolve_zone_id(name).await?;
        self.ctx
            .provider()
            .dump_zone(&zone_id)
            .await
            .map_err(|e| self.ctx.handle_provider_error("dump_zone", e))
    }
}
