pub mod anilist;
pub mod spotify;
