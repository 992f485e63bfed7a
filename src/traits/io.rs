//! RON I/O
use crate::types::ConvergenceError;
use std::fs;

pub trait ConvertToSerializable: Sized {
    //! Convert to/from a serializable representation
    type SerializableType: serde::Serialize + serde::de::DeserializeOwned;
    /// Convert to the serializable representation
    fn to_serializable(&self) -> Self::SerializableType;
    /// Convert from the serializable representation
    fn from_serializable(data: Self::SerializableType) -> Result<Self, ConvergenceError>;
}

pub trait RONExport {
    //! Export as RON

    /// Generate the RON string
    fn to_ron_string(&self) -> Result<String, ConvergenceError>;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) -> Result<(), ConvergenceError> {
        let ron_s = self.to_ron_string()?;
        fs::write(filename, ron_s)?;
        Ok(())
    }
}

pub trait RONImport: Sized {
    //! Import from RON

    /// Parse a RON string
    fn from_ron_string(s: &str) -> Result<Self, ConvergenceError>;

    /// Import from a RON file
    fn import_from_ron(filename: &str) -> Result<Self, ConvergenceError> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(&content)
    }
}
