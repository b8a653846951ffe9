use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::ports::context::AdminContext;
use crate::features::ports::models::{join_list, PortRecord};

// =============================================================================
// FORM MODE
// =============================================================================

/// Mode the record form is opened in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Add,
    Edit,
    View,
    Delete,
}

impl FormMode {
    pub fn header(&self) -> &'static str {
        match self {
            FormMode::Add => "Add New Record – Enter details to create a new entry.",
            FormMode::Edit => "Edit Record – Update information as needed.",
            FormMode::Delete => "Delete Record – This action is irreversible.",
            FormMode::View => "View Record – Review the details.",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Add New Record",
            FormMode::Edit => "Update Record",
            FormMode::Delete => "Delete Record",
            FormMode::View => "Close",
        }
    }

    /// Whether inputs are read-only in this mode
    pub fn fields_disabled(&self) -> bool {
        matches!(self, FormMode::Delete | FormMode::View)
    }

    pub fn button_color(&self) -> &'static str {
        match self {
            FormMode::Delete => "error",
            _ => "primary",
        }
    }

    pub fn header_color(&self) -> &'static str {
        match self {
            FormMode::Delete => "#d32f2f",
            _ => "#004d40",
        }
    }

    /// Modes that load an existing record when opened
    pub fn requires_record(&self) -> bool {
        !matches!(self, FormMode::Add)
    }
}

// =============================================================================
// FORM FIELDS
// =============================================================================

/// Text inputs of the record form; list fields are comma separated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PortFormFields {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(default)]
    pub name: String,

    #[validate(length(min = 1, message = "City is required"))]
    #[serde(default)]
    pub city: String,

    #[validate(length(min = 1, message = "Country is required"))]
    #[serde(default)]
    pub country: String,

    #[validate(length(min = 1, message = "Province is required"))]
    #[serde(default)]
    pub province: String,

    #[validate(length(min = 1, message = "Timezone is required"))]
    #[serde(default)]
    pub timezone: String,

    /// "lng, lat"
    #[validate(length(min = 1, message = "Coordinates are required"))]
    #[serde(default)]
    pub coordinates: String,

    #[validate(length(min = 1, message = "Code is required"))]
    #[serde(default)]
    pub code: String,

    #[validate(length(min = 1, message = "Alias is required"))]
    #[serde(default)]
    pub alias: String,

    #[validate(length(min = 1, message = "Regions are required"))]
    #[serde(default)]
    pub regions: String,
}

impl From<&PortRecord> for PortFormFields {
    fn from(record: &PortRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            city: record.city.clone().unwrap_or_default(),
            country: record.country.clone().unwrap_or_default(),
            province: record.province.clone().unwrap_or_default(),
            timezone: record.timezone.clone().unwrap_or_default(),
            coordinates: join_list(&record.coordinates),
            code: record
                .code
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            alias: join_list(&record.alias),
            regions: join_list(&record.regions),
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Query params for opening the form
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct OpenFormQuery {
    /// add, edit, view or delete
    pub mode: FormMode,
    /// Selected record; required for every mode but add
    pub id: Option<String>,
}

/// Form submission together with the caller's admin context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitFormDto {
    pub context: AdminContext,
    #[serde(default)]
    pub fields: PortFormFields,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Everything needed to render the opened form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormViewDto {
    pub mode: FormMode,
    pub selected_id: Option<String>,
    pub header: String,
    pub header_color: String,
    pub button_label: String,
    pub button_color: String,
    pub fields_disabled: bool,
    pub fields: PortFormFields,
}

impl FormViewDto {
    pub fn new(mode: FormMode, selected_id: Option<String>, fields: PortFormFields) -> Self {
        Self {
            mode,
            selected_id,
            header: mode.header().to_string(),
            header_color: mode.header_color().to_string(),
            button_label: mode.button_label().to_string(),
            button_color: mode.button_color().to_string(),
            fields_disabled: mode.fields_disabled(),
            fields,
        }
    }
}

/// Result of a submission: the updated context and the written record, if any
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitOutcomeDto {
    pub context: AdminContext,
    pub record: Option<PortRecord>,
}
