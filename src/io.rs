//! Input/output
#[cfg(feature = "serde")]
mod ron;

#[cfg(feature = "serde")]
pub use self::ron::SerializableField;
