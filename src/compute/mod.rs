pub mod forward;
pub mod posterior;
pub mod print_model_stats;
