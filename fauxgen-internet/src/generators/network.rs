//! Network address generators
//!
//! This module provides generators for:
//! - IPv4 addresses with every octet in `[2, 255]`
//! - IPv6 addresses under the `2001:cafe::/32` prefix

use fauxgen::{Generator, IntRange, Lexicon, RandomSource, Result};

/// Smallest octet an IPv4 address may contain; keeps clear of `0.x` and `1.x`
pub const IPV4_OCTET_MIN: i64 = 2;
/// Largest octet an IPv4 address may contain
pub const IPV4_OCTET_MAX: i64 = 255;
/// Fixed leading groups of every generated IPv6 address
pub const IPV6_PREFIX: &str = "2001:cafe";

const IPV6_RANDOM_GROUPS: usize = 6;

// ============================================================================
// IP Address Generator
// ============================================================================

/// Generator for IP addresses (IPv4 or IPv6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpAddressGenerator {
    /// Dotted-quad IPv4, each octet drawn from `[2, 255]`
    V4,
    /// `2001:cafe:` followed by six unpadded lowercase hex groups
    V6,
}

impl IpAddressGenerator {
    /// Create a generator for IPv4 addresses
    pub fn ipv4() -> Self {
        Self::V4
    }

    /// Create a generator for IPv6 addresses
    pub fn ipv6() -> Self {
        Self::V6
    }
}

impl Generator<String> for IpAddressGenerator {
    fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<String> {
        match self {
            IpAddressGenerator::V4 => {
                let octet = IntRange::new(IPV4_OCTET_MIN, IPV4_OCTET_MAX)?;
                let octets: Vec<String> =
                    (0..4).map(|_| octet.draw(source).to_string()).collect();
                Ok(octets.join("."))
            }
            IpAddressGenerator::V6 => {
                let group = IntRange::new(0, i64::from(u16::MAX))?;
                let mut address = String::from(IPV6_PREFIX);
                for _ in 0..IPV6_RANDOM_GROUPS {
                    address.push_str(&format!(":{:x}", group.draw(source)));
                }
                Ok(address)
            }
        }
    }
}
