pub mod admin;
pub mod badge;
mod badge_image;
mod loading;
pub mod verify;
