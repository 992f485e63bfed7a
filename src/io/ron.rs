//! RON I/O
use crate::{
    analysis::AnalysisConfig,
    convergence::{ConvergenceEntry, ConvergenceTable},
    field::Field,
    grid::StructuredGrid,
    traits::{ConvertToSerializable, RONExport, RONImport},
    types::ConvergenceError,
};

impl<S: ConvertToSerializable> RONExport for S {
    fn to_ron_string(&self) -> Result<String, ConvergenceError> {
        Ok(ron::ser::to_string_pretty(
            &self.to_serializable(),
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

impl<S: ConvertToSerializable> RONImport for S {
    fn from_ron_string(s: &str) -> Result<Self, ConvergenceError> {
        Self::from_serializable(ron::from_str(s)?)
    }
}

/// Serializable field, with values listed with the first axis varying slowest
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SerializableField {
    shape: [usize; 3],
    values: Vec<f64>,
}

impl ConvertToSerializable for Field {
    type SerializableType = SerializableField;
    fn to_serializable(&self) -> SerializableField {
        SerializableField {
            shape: self.shape(),
            values: self.to_natural_order(),
        }
    }
    fn from_serializable(data: SerializableField) -> Result<Self, ConvergenceError> {
        Field::from_values(data.shape, &data.values)
    }
}

impl ConvertToSerializable for StructuredGrid {
    type SerializableType = StructuredGrid;
    fn to_serializable(&self) -> StructuredGrid {
        *self
    }
    fn from_serializable(data: StructuredGrid) -> Result<Self, ConvergenceError> {
        StructuredGrid::new(data.shape(), data.spacing())
    }
}

impl ConvertToSerializable for ConvergenceTable {
    type SerializableType = Vec<ConvergenceEntry>;
    fn to_serializable(&self) -> Vec<ConvergenceEntry> {
        self.entries().collect()
    }
    fn from_serializable(data: Vec<ConvergenceEntry>) -> Result<Self, ConvergenceError> {
        Ok(data.into_iter().collect())
    }
}

impl ConvertToSerializable for AnalysisConfig {
    type SerializableType = AnalysisConfig;
    fn to_serializable(&self) -> AnalysisConfig {
        self.clone()
    }
    fn from_serializable(data: AnalysisConfig) -> Result<Self, ConvergenceError> {
        Ok(data)
    }
}
