pub mod api;
pub mod form;
pub mod list_query;
pub mod upload;
