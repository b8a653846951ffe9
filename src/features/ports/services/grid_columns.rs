use crate::features::ports::dtos::{GridColumnDto, GridLayoutDto};
use crate::features::ports::models::{join_list, PortRecord};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, EMPTY_CELL, PAGE_SIZE_OPTIONS};

const LIST_DESCRIPTION: &str = "This column has a value getter and is not sortable.";

/// (field, header, width, sortable, has description)
const COLUMNS: [(&str, &str, u32, bool, bool); 12] = [
    ("id", "ID", 70, true, false),
    ("name", "Name", 160, true, false),
    ("city", "City", 160, true, false),
    ("country", "Country", 160, true, false),
    ("coordinates", "Coordinates", 160, false, true),
    ("province", "Province", 160, true, true),
    ("timezone", "Timezone", 160, true, true),
    ("unlocs", "Unlocs", 160, true, true),
    ("code", "Code", 160, true, true),
    ("alias", "Alias", 160, false, true),
    ("regions", "Regions", 160, false, true),
    ("action", "Action", 160, false, false),
];

/// Fields of the columns that show record data
pub fn data_fields() -> impl Iterator<Item = &'static str> {
    COLUMNS
        .iter()
        .map(|&(field, ..)| field)
        .filter(|field| *field != "action")
}

pub fn grid_layout() -> GridLayoutDto {
    let columns = COLUMNS
        .iter()
        .map(|&(field, header, width, sortable, described)| GridColumnDto {
            field: field.to_string(),
            header_name: header.to_string(),
            width,
            sortable,
            description: described.then(|| LIST_DESCRIPTION.to_string()),
        })
        .collect();

    GridLayoutDto {
        columns,
        page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        default_page_size: DEFAULT_PAGE_SIZE,
    }
}

/// Cell text for a column; list columns fall back to a placeholder when empty
pub fn cell_text(record: &PortRecord, field: &str) -> String {
    match field {
        "id" => record.id.clone(),
        "name" => record.name.clone().unwrap_or_default(),
        "city" => record.city.clone().unwrap_or_default(),
        "country" => record.country.clone().unwrap_or_default(),
        "province" => record.province.clone().unwrap_or_default(),
        "timezone" => record.timezone.clone().unwrap_or_default(),
        "code" => record
            .code
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_default(),
        "coordinates" => list_cell(join_list(&record.coordinates)),
        "unlocs" => list_cell(join_list(&record.unlocs)),
        "alias" => list_cell(join_list(&record.alias)),
        "regions" => list_cell(join_list(&record.regions)),
        _ => String::new(),
    }
}

fn list_cell(joined: String) -> String {
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_grid() {
        let layout = grid_layout();
        assert_eq!(layout.columns.len(), 12);
        assert_eq!(layout.columns[0].field, "id");
        assert_eq!(layout.columns[0].width, 70);
        assert_eq!(layout.page_size_options, vec![5, 10, 25]);
        assert_eq!(layout.default_page_size, 10);

        let unsortable: Vec<&str> = layout
            .columns
            .iter()
            .filter(|c| !c.sortable)
            .map(|c| c.field.as_str())
            .collect();
        assert_eq!(unsortable, vec!["coordinates", "alias", "regions", "action"]);
        assert_eq!(data_fields().count(), 11);
    }

    #[test]
    fn test_list_cells() {
        let record = PortRecord {
            id: "AEAJM".to_string(),
            coordinates: vec![55.5136433, 25.4052165],
            unlocs: vec!["AEAJM".to_string()],
            ..Default::default()
        };

        assert_eq!(cell_text(&record, "coordinates"), "55.5136433, 25.4052165");
        assert_eq!(cell_text(&record, "unlocs"), "AEAJM");
        assert_eq!(cell_text(&record, "alias"), "---");
        assert_eq!(cell_text(&record, "name"), "");
    }
}
