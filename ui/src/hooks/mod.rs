pub mod use_close_dialog;
pub mod use_connectivity;
pub mod use_missing_metadata_check;
