pub mod details;
pub mod home;
pub mod incomes;
pub mod orders;
pub mod sales;
pub mod statistics_page;
pub mod stocks;
