pub mod header;
pub mod upload_form;
pub mod spinner;
pub mod result_panel;
pub mod chat_panel;
