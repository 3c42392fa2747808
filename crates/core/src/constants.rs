//! Shared constants for the WealthTrack domain.

/// Fractional digits kept for currency amounts (cost basis, current value, fees).
pub const MONEY_SCALE: u32 = 2;

/// Fractional digits kept for per-unit prices (average buy price, last price).
pub const PRICE_SCALE: u32 = 4;

/// Fractional digits kept for unit quantities. Units may be fractional.
pub const UNIT_SCALE: u32 = 6;

pub const DEFAULT_RISK_PROFILE: &str = "moderate";
pub const DEFAULT_KYC_STATUS: &str = "unverified";

pub const GOAL_STATUS_ACTIVE: &str = "active";
