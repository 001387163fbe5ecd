//! Request handlers for the offer resolver API.
//!
//! Handlers stay thin: they extract the request, delegate to
//! [`crate::resolver`], and map errors via [`crate::error::AppError`].

pub mod find_product;
