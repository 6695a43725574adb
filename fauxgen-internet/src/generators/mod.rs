//! Fake internet data generators
//!
//! This module provides generators for:
//! - Domain names, websites, URLs and HTTP methods
//! - IPv4 and IPv6 addresses
//! - Hardware identifiers (MAC addresses, MEIDs)
//! - Account text (usernames, passwords)

pub mod domain;
pub mod hardware;
pub mod network;
pub mod text;
