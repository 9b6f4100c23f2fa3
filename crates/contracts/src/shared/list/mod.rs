//! Search, pagination and CRUD state for the data-management screens

pub mod crud_controller;
pub mod filter;
pub mod pagination;
pub mod record_store;

pub use crud_controller::{CrudController, DialogState, ListView, Notice, Notifier, SubmitOutcome};
pub use filter::{filter_records, Searchable};
pub use pagination::{page_markers, paginate, total_pages, Page, PageMarker, PageState};
pub use record_store::RecordStore;
