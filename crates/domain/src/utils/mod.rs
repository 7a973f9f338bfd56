//! Small pure helpers shared by services and repositories

pub mod text;
