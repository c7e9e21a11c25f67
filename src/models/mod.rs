pub mod activities;

pub use activities::ActivityRow;
