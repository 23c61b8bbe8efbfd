pub mod compare_period;
