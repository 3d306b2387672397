pub mod analyze;
pub mod dataset;
pub mod dispatch;
pub mod facts;
pub mod search;
pub mod train;
