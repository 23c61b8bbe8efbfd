pub mod fetch_status;
pub mod filter_bar;
pub mod page_header;
pub mod rows_table;
pub mod stat_card;
