pub mod config;
pub mod diff;
pub mod drafts;
pub mod form;
pub mod presentation;
pub mod stage;
pub mod time;
pub mod tools;
pub mod tree;
