mod form_dto;
mod grid_dto;
mod search_dto;

pub use form_dto::{
    FormMode, FormViewDto, OpenFormQuery, PortFormFields, SubmitFormDto, SubmitOutcomeDto,
};
pub use grid_dto::{
    FilterClause, FilterOperator, GridColumnDto, GridLayoutDto, GridStateDto, PortPageDto,
    SortItemDto,
};
pub use search_dto::SearchActionDto;
