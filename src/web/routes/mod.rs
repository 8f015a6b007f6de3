pub mod activities;
pub mod activity;
pub mod health;
pub mod home;
