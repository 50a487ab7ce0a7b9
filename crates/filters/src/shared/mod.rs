pub mod config;
pub mod date_utils;
pub mod localization;
