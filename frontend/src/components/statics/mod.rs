pub mod home_screen;
pub mod top_bar;
