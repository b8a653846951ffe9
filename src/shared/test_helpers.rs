use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::ports::clients::{PortListing, PortStore, StoreQuery};
use crate::features::ports::models::{PortCode, PortRecord};

/// Store operation recorded by [`InMemoryPortStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List(String),
    Get(String),
    Create(String),
    Update(String),
    Delete(String),
}

/// Port store keeping records in memory and logging every call
#[derive(Default)]
pub struct InMemoryPortStore {
    records: Mutex<Vec<PortRecord>>,
    calls: Mutex<Vec<StoreCall>>,
    total_override: Option<i64>,
    fail: bool,
    all_ids_taken: bool,
}

#[allow(dead_code)]
impl InMemoryPortStore {
    pub fn with_records(records: Vec<PortRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// Store whose every call fails like an unreachable upstream
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Store answering every lookup with a record, so no id is ever free
    pub fn with_all_ids_taken() -> Self {
        Self {
            all_ids_taken: true,
            ..Default::default()
        }
    }

    /// Reports `total` in listings instead of the number of stored records
    pub fn with_total(mut self, total: i64) -> Self {
        self.total_override = Some(total);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.lock().unwrap().iter().any(|r| r.id == id)
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(AppError::ExternalServiceError(
                "Port store request failed: connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PortStore for InMemoryPortStore {
    async fn list(&self, query: &StoreQuery) -> Result<PortListing> {
        self.record(StoreCall::List(query.to_query_string()))?;
        let rows = self.records.lock().unwrap().clone();
        let total = self.total_override.unwrap_or(rows.len() as i64);
        Ok(PortListing {
            rows,
            total: Some(total),
        })
    }

    async fn get(&self, id: &str) -> Result<Option<PortRecord>> {
        self.record(StoreCall::Get(id.to_string()))?;
        if self.all_ids_taken {
            return Ok(Some(sample_port(id)));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create(&self, record: &PortRecord) -> Result<PortRecord> {
        self.record(StoreCall::Create(record.id.clone()))?;
        self.records.lock().unwrap().push(record.clone());
        Ok(record.clone())
    }

    async fn update(&self, id: &str, record: &PortRecord) -> Result<PortRecord> {
        self.record(StoreCall::Update(id.to_string()))?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Port store: updating port {}", id)))?;
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(StoreCall::Delete(id.to_string()))?;
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

pub fn sample_port(id: &str) -> PortRecord {
    PortRecord {
        id: id.to_string(),
        name: Some("Ajman".to_string()),
        city: Some("Ajman".to_string()),
        country: Some("United Arab Emirates".to_string()),
        province: Some("Ajman".to_string()),
        timezone: Some("Asia/Dubai".to_string()),
        coordinates: vec![55.5136433, 25.4052165],
        code: Some(PortCode::Integer(52000)),
        alias: vec!["Ajman Port".to_string(), "Ajmaan".to_string()],
        regions: vec!["Middle East".to_string()],
        unlocs: vec![id.to_string()],
        time: Some("2025-01-01T00:00:00.000Z".to_string()),
        extra: Default::default(),
    }
}
