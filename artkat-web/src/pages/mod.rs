pub mod artwork;
pub mod home;
