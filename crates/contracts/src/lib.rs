//! Wire contracts and pure domain rules shared by the photo-admin console.
//!
//! Everything here is free of browser APIs so it can be unit tested natively.

pub mod shared;
pub mod usecases;
