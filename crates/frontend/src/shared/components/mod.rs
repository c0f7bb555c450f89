pub mod csv_import;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod row_actions;
pub mod search_bar;
pub mod table;
pub mod ui;
