pub mod categories;
pub mod config;
pub mod documents;
pub mod events;
pub mod export;
pub mod form;
pub mod home;
pub mod members;
pub mod shell;
pub mod show;
pub mod view;
