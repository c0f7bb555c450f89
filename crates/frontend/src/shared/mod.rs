pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod list_controller;
pub mod modal;
pub mod mutations;
pub mod page_frame;
pub mod remote;
pub mod resource_page;
pub mod toast;
