//! Middleware module - tower layers applied to the API routes

pub mod rate_limit;
