//! Domain types for bond pricing.

mod bond_spec;
mod frequency;

pub use bond_spec::BondSpec;
pub use frequency::Frequency;
