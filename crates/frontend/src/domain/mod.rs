pub mod a001_business;
pub mod a002_category;
pub mod a003_sub_category;
pub mod a004_cuisine;
pub mod a005_menu_type;
pub mod a006_menu_item;
pub mod a007_user;
pub mod a008_collaborator;
pub mod a009_claim;
pub mod a010_dispute;
pub mod a011_ad;
pub mod a012_reported_review;
