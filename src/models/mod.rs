pub mod participant;
pub mod program;
pub mod training;
