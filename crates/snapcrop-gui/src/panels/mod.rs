pub mod crop_interaction;
pub mod menu_bar;
pub mod status;
pub mod subject;
pub mod viewport;
