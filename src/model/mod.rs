pub mod champselect;
pub mod ids;
pub mod rank;
