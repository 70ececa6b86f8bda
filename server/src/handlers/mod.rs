// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP handlers.

pub mod health;
pub mod home;
pub mod register;
