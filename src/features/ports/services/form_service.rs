use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::ports::clients::PortStore;
use crate::features::ports::context::AdminContext;
use crate::features::ports::dtos::{FormMode, FormViewDto, PortFormFields};
use crate::features::ports::models::{split_list, PortCode, PortRecord};
use crate::shared::constants::{MAX_ID_ATTEMPTS, RECORD_ID_LENGTH};

const ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Service behind the add/edit/view/delete record form
pub struct FormService {
    store: Arc<dyn PortStore>,
}

impl FormService {
    pub fn new(store: Arc<dyn PortStore>) -> Self {
        Self { store }
    }

    /// Load the form for `mode`; every mode but add needs a selected record
    pub async fn open(&self, mode: FormMode, selected_id: Option<&str>) -> Result<FormViewDto> {
        if !mode.requires_record() {
            return Ok(FormViewDto::new(mode, None, PortFormFields::default()));
        }

        let id = selected_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("{:?} form requires a record id", mode)))?;

        let record = self.fetch(id).await?;

        Ok(FormViewDto::new(
            mode,
            Some(id.to_string()),
            PortFormFields::from(&record),
        ))
    }

    /// Submit the form opened in `ctx`
    ///
    /// On success the context is marked stale and the modal closed. On failure
    /// the error is logged and returned with the modal left open.
    pub async fn submit(
        &self,
        ctx: &mut AdminContext,
        fields: PortFormFields,
    ) -> Result<Option<PortRecord>> {
        if ctx.form_mode == FormMode::View {
            ctx.close_modal();
            return Ok(None);
        }

        ctx.loading = true;
        let result = self
            .write(ctx.form_mode, ctx.selected_row.as_deref(), fields)
            .await;
        ctx.loading = false;

        match result {
            Ok(record) => {
                ctx.mark_stale();
                ctx.close_modal();
                Ok(record)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to submit {:?} form for record {:?}: {}",
                    ctx.form_mode,
                    ctx.selected_row,
                    e
                );
                Err(e)
            }
        }
    }

    async fn write(
        &self,
        mode: FormMode,
        selected_id: Option<&str>,
        fields: PortFormFields,
    ) -> Result<Option<PortRecord>> {
        match mode {
            FormMode::View => Ok(None),
            FormMode::Delete => {
                let id = require_selected(selected_id)?;
                tracing::info!("Deleting port {}", id);
                self.store.delete(id).await?;
                Ok(None)
            }
            FormMode::Add => {
                fields
                    .validate()
                    .map_err(|e| AppError::Validation(e.to_string()))?;

                let id = self.allocate_id().await?;
                let record = build_record(id, &fields, Default::default())?;
                tracing::info!("Adding port {}", record.id);
                self.store.create(&record).await.map(Some)
            }
            FormMode::Edit => {
                fields
                    .validate()
                    .map_err(|e| AppError::Validation(e.to_string()))?;

                let id = require_selected(selected_id)?;
                let current = self.fetch(id).await?;
                let record = build_record(id.to_string(), &fields, current.extra)?;
                tracing::info!("Updating port {}", id);
                self.store.update(id, &record).await.map(Some)
            }
        }
    }

    async fn fetch(&self, id: &str) -> Result<PortRecord> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Port '{}' not found", id)))
    }

    /// Draws identifiers until one is free in the store
    async fn allocate_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_record_id();
            if self.store.get(&id).await?.is_none() {
                return Ok(id);
            }
            tracing::warn!("Generated port id {} already exists, drawing again", id);
        }

        Err(AppError::Conflict(format!(
            "Could not allocate a free port id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }
}

fn require_selected(selected_id: Option<&str>) -> Result<&str> {
    selected_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("No record selected".to_string()))
}

/// Random 8-character uppercase base-36 identifier
pub fn generate_record_id() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(RECORD_ID_LENGTH);
    for _ in 0..RECORD_ID_LENGTH {
        id.push(ID_ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    id
}

/// Record written by an add or edit submission
fn build_record(
    id: String,
    fields: &PortFormFields,
    extra: serde_json::Map<String, serde_json::Value>,
) -> Result<PortRecord> {
    let coordinates = parse_coordinates(&fields.coordinates)?;
    let code = match fields.code.parse::<i64>() {
        Ok(n) => PortCode::Integer(n),
        Err(_) => PortCode::Text(fields.code.clone()),
    };

    Ok(PortRecord {
        unlocs: vec![id.clone()],
        id,
        name: Some(fields.name.clone()),
        city: Some(fields.city.clone()),
        country: Some(fields.country.clone()),
        province: Some(fields.province.clone()),
        timezone: Some(fields.timezone.clone()),
        coordinates,
        code: Some(code),
        alias: split_list(&fields.alias),
        regions: split_list(&fields.regions),
        time: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        extra,
    })
}

fn parse_coordinates(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(|piece| {
            piece.trim().parse::<f64>().map_err(|_| {
                AppError::Validation(format!(
                    "Coordinates must be comma separated numbers, got '{}'",
                    piece.trim()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_port, InMemoryPortStore, StoreCall};

    fn filled_fields() -> PortFormFields {
        PortFormFields {
            name: "Ajman".to_string(),
            city: "Ajman".to_string(),
            country: "United Arab Emirates".to_string(),
            province: "Ajman".to_string(),
            timezone: "Asia/Dubai".to_string(),
            coordinates: "55.5136433, 25.4052165".to_string(),
            code: "52000".to_string(),
            alias: "a, b".to_string(),
            regions: "r1".to_string(),
        }
    }

    fn is_record_id(id: &str) -> bool {
        id.len() == RECORD_ID_LENGTH
            && id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }

    fn service(store: &Arc<InMemoryPortStore>) -> FormService {
        FormService::new(store.clone())
    }

    #[test]
    fn test_generated_ids_are_base36() {
        for _ in 0..100 {
            let id = generate_record_id();
            assert!(is_record_id(&id), "unexpected id {}", id);
        }
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("55.5, 25.4").unwrap(), vec![55.5, 25.4]);
        assert!(matches!(
            parse_coordinates("55.5, north"),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_open_add_returns_empty_form() {
        let store = Arc::new(InMemoryPortStore::default());
        let view = service(&store).open(FormMode::Add, None).await.unwrap();

        assert_eq!(view.fields, PortFormFields::default());
        assert_eq!(view.button_label, "Add New Record");
        assert!(!view.fields_disabled);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_open_edit_flattens_lists() {
        let store = Arc::new(InMemoryPortStore::with_records(vec![sample_port("AEAJM")]));
        let view = service(&store)
            .open(FormMode::Edit, Some("AEAJM"))
            .await
            .unwrap();

        assert_eq!(view.selected_id.as_deref(), Some("AEAJM"));
        assert_eq!(view.fields.alias, "Ajman Port, Ajmaan");
        assert_eq!(view.fields.coordinates, "55.5136433, 25.4052165");
        assert_eq!(store.calls(), vec![StoreCall::Get("AEAJM".to_string())]);
    }

    #[tokio::test]
    async fn test_open_view_without_id_is_rejected() {
        let store = Arc::new(InMemoryPortStore::default());
        let result = service(&store).open(FormMode::View, None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_open_missing_record_is_not_found() {
        let store = Arc::new(InMemoryPortStore::default());
        let result = service(&store).open(FormMode::Delete, Some("NOPE")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_splits_lists_literally() {
        let store = Arc::new(InMemoryPortStore::default());
        let mut ctx = AdminContext::default();
        ctx.open_add();

        let record = service(&store)
            .submit(&mut ctx, filled_fields())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.alias, vec!["a".to_string(), " b".to_string()]);
        assert_eq!(record.regions, vec!["r1".to_string()]);
        assert_eq!(record.coordinates, vec![55.5136433, 25.4052165]);
        assert_eq!(record.code, Some(PortCode::Integer(52000)));
        assert!(is_record_id(&record.id));
        assert_eq!(record.unlocs, vec![record.id.clone()]);
        let time = record.time.as_deref().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());

        assert!(ctx.data_stale);
        assert!(!ctx.modal_open);
        assert!(!ctx.loading);
        assert!(store.contains(&record.id));
    }

    #[tokio::test]
    async fn test_add_requires_every_field() {
        let store = Arc::new(InMemoryPortStore::default());
        let mut ctx = AdminContext::default();
        ctx.open_add();

        let mut fields = filled_fields();
        fields.timezone.clear();

        let result = service(&store).submit(&mut ctx, fields).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(ctx.modal_open);
        assert!(!ctx.data_stale);
        assert!(!ctx.loading);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_keeps_selected_id_and_unknown_fields() {
        let mut existing = sample_port("AEAJM");
        existing
            .extra
            .insert("source".to_string(), serde_json::json!("legacy"));
        let store = Arc::new(InMemoryPortStore::with_records(vec![existing]));
        let mut ctx = AdminContext::default();
        ctx.open_modal(FormMode::Edit, "AEAJM");

        let mut fields = filled_fields();
        fields.name = "Ajman Free Zone".to_string();

        let record = service(&store)
            .submit(&mut ctx, fields)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.id, "AEAJM");
        assert_eq!(record.unlocs, vec!["AEAJM".to_string()]);
        assert_eq!(record.name.as_deref(), Some("Ajman Free Zone"));
        assert_eq!(record.extra.get("source"), Some(&serde_json::json!("legacy")));

        let calls = store.calls();
        assert_eq!(calls.last(), Some(&StoreCall::Update("AEAJM".to_string())));
        assert!(ctx.data_stale);
        assert!(!ctx.modal_open);
    }

    #[tokio::test]
    async fn test_delete_issues_one_call_without_validation() {
        let store = Arc::new(InMemoryPortStore::with_records(vec![sample_port("AEAJM")]));
        let mut ctx = AdminContext::default();
        ctx.open_modal(FormMode::Delete, "AEAJM");

        let result = service(&store)
            .submit(&mut ctx, PortFormFields::default())
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.calls(), vec![StoreCall::Delete("AEAJM".to_string())]);
        assert!(!store.contains("AEAJM"));
        assert!(ctx.data_stale);
        assert!(!ctx.modal_open);
    }

    #[tokio::test]
    async fn test_view_only_closes() {
        let store = Arc::new(InMemoryPortStore::with_records(vec![sample_port("AEAJM")]));
        let mut ctx = AdminContext::default();
        ctx.open_modal(FormMode::View, "AEAJM");

        let result = service(&store)
            .submit(&mut ctx, PortFormFields::default())
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(store.calls().is_empty());
        assert!(!ctx.modal_open);
        assert!(!ctx.data_stale);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_modal_open() {
        let store = Arc::new(InMemoryPortStore::failing());
        let mut ctx = AdminContext::default();
        ctx.open_modal(FormMode::Delete, "AEAJM");

        let result = service(&store)
            .submit(&mut ctx, PortFormFields::default())
            .await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
        assert!(ctx.modal_open);
        assert!(!ctx.data_stale);
        assert!(!ctx.loading);
    }

    #[tokio::test]
    async fn test_add_gives_up_when_ids_keep_colliding() {
        let store = Arc::new(InMemoryPortStore::with_all_ids_taken());
        let mut ctx = AdminContext::default();
        ctx.open_add();

        let result = service(&store).submit(&mut ctx, filled_fields()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let calls = store.calls();
        assert_eq!(calls.len(), MAX_ID_ATTEMPTS);
        assert!(calls.iter().all(|c| matches!(c, StoreCall::Get(_))));
        assert!(ctx.modal_open);
    }
}
