//! JSON representation of host arrays
//!
//! A document stores the class tag, shape and column-major values as f64
//! numbers, which every supported class converts to and from. It is the
//! exchange format of the `fastmed` command-line tool.

use fastmed_core::{ClassId, MedianError};
use serde::{Deserialize, Serialize};

use crate::HostArray;

/// Serializable matrix with column-major `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub class: ClassId,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub complex: bool,
    pub nrows: usize,
    pub ncols: usize,
    pub data: Vec<f64>,
}

impl MatrixDocument {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl TryFrom<MatrixDocument> for HostArray {
    type Error = MedianError;

    fn try_from(document: MatrixDocument) -> Result<Self, Self::Error> {
        let array =
            HostArray::from_f64s(document.class, document.nrows, document.ncols, &document.data)?;
        Ok(array.with_complex(document.complex))
    }
}

impl HostArray {
    /// Describe the array as a document, if its class converts to f64
    pub fn to_document(&self) -> Option<MatrixDocument> {
        Some(MatrixDocument {
            class: self.class(),
            complex: self.is_complex(),
            nrows: self.nrows(),
            ncols: self.ncols(),
            data: self.to_f64_vec()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fast_median;

    #[test]
    fn test_parse_document() {
        let text = r#"{ "class": "int16", "nrows": 3, "ncols": 1, "data": [3, 1, 2] }"#;
        let document = MatrixDocument::from_json(text).unwrap();
        assert_eq!(document.class, ClassId::Int16);
        assert!(!document.complex);

        let array = HostArray::try_from(document).unwrap();
        assert_eq!(array.to_vec::<i16>(), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_median_through_documents() {
        let text = r#"{ "class": "double", "nrows": 4, "ncols": 2,
                        "data": [4, 1, 3, 2, 5, 5, 5, 5] }"#;
        let input = HostArray::try_from(MatrixDocument::from_json(text).unwrap()).unwrap();
        let output = fast_median(&[input]).unwrap().to_document().unwrap();

        assert_eq!(
            output,
            MatrixDocument {
                class: ClassId::Double,
                complex: false,
                nrows: 1,
                ncols: 2,
                data: vec![2.5, 5.0],
            }
        );

        let json = output.to_json().unwrap();
        assert!(json.contains("\"class\": \"double\""));
        assert!(!json.contains("complex"));
    }

    #[test]
    fn test_unknown_class_name_is_rejected() {
        let text = r#"{ "class": "quaternion", "nrows": 1, "ncols": 1, "data": [1] }"#;
        assert!(MatrixDocument::from_json(text).is_err());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let document = MatrixDocument {
            class: ClassId::Single,
            complex: false,
            nrows: 2,
            ncols: 2,
            data: vec![1.0, 2.0, 3.0],
        };
        assert!(HostArray::try_from(document).is_err());
    }
}
