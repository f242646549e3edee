pub mod bounty;
pub mod cargo;
pub mod effects;
pub mod valuation;
