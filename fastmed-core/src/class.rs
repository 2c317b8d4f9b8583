//! Host class identifiers
//!
//! A matrix handed to the median routine carries a runtime class tag naming
//! its element type. The numbering matches the host environment's class ids,
//! so tags can be passed through from the host unchanged.

/// Runtime class tag of a host array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ClassId {
    Unknown = 0,
    Cell = 1,
    Struct = 2,
    Logical = 3,
    Char = 4,
    Void = 5,
    Double = 6,
    Single = 7,
    Int8 = 8,
    Uint8 = 9,
    Int16 = 10,
    Uint16 = 11,
    Int32 = 12,
    Uint32 = 13,
    Int64 = 14,
    Uint64 = 15,
    Function = 16,
}

impl From<u8> for ClassId {
    fn from(value: u8) -> Self {
        match value {
            1 => ClassId::Cell,
            2 => ClassId::Struct,
            3 => ClassId::Logical,
            4 => ClassId::Char,
            5 => ClassId::Void,
            6 => ClassId::Double,
            7 => ClassId::Single,
            8 => ClassId::Int8,
            9 => ClassId::Uint8,
            10 => ClassId::Int16,
            11 => ClassId::Uint16,
            12 => ClassId::Int32,
            13 => ClassId::Uint32,
            14 => ClassId::Int64,
            15 => ClassId::Uint64,
            16 => ClassId::Function,
            _ => ClassId::Unknown,
        }
    }
}

impl core::fmt::Display for ClassId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ClassId::Unknown => "unknown",
            ClassId::Cell => "cell",
            ClassId::Struct => "struct",
            ClassId::Logical => "logical",
            ClassId::Char => "char",
            ClassId::Void => "void",
            ClassId::Double => "double",
            ClassId::Single => "single",
            ClassId::Int8 => "int8",
            ClassId::Uint8 => "uint8",
            ClassId::Int16 => "int16",
            ClassId::Uint16 => "uint16",
            ClassId::Int32 => "int32",
            ClassId::Uint32 => "uint32",
            ClassId::Int64 => "int64",
            ClassId::Uint64 => "uint64",
            ClassId::Function => "function",
        };
        write!(f, "{name}")
    }
}

impl ClassId {
    /// Classes the median routine can run on, in dispatch order
    pub const SUPPORTED: [ClassId; 8] = [
        ClassId::Double,
        ClassId::Single,
        ClassId::Int8,
        ClassId::Uint8,
        ClassId::Int16,
        ClassId::Uint16,
        ClassId::Int32,
        ClassId::Uint32,
    ];

    /// Whether the class holds real numbers
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            ClassId::Double
                | ClassId::Single
                | ClassId::Int8
                | ClassId::Uint8
                | ClassId::Int16
                | ClassId::Uint16
                | ClassId::Int32
                | ClassId::Uint32
                | ClassId::Int64
                | ClassId::Uint64
        )
    }

    /// Whether the median routine has an instantiation for this class
    ///
    /// The 64-bit integer classes are numeric but deliberately left out.
    pub const fn is_supported(&self) -> bool {
        self.is_numeric() && !matches!(self, ClassId::Int64 | ClassId::Uint64)
    }

    pub const fn is_integer(&self) -> bool {
        self.is_numeric() && !matches!(self, ClassId::Double | ClassId::Single)
    }

    /// Size in bytes of one element, for numeric classes only
    pub const fn element_size(&self) -> Option<usize> {
        match self {
            ClassId::Int8 | ClassId::Uint8 => Some(1),
            ClassId::Int16 | ClassId::Uint16 => Some(2),
            ClassId::Single | ClassId::Int32 | ClassId::Uint32 => Some(4),
            ClassId::Double | ClassId::Int64 | ClassId::Uint64 => Some(8),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_round_trips_known_tags() {
        for tag in 0u8..=16 {
            assert_eq!(ClassId::from(tag) as u8, tag);
        }
        assert_eq!(ClassId::from(17), ClassId::Unknown);
        assert_eq!(ClassId::from(255), ClassId::Unknown);
    }

    #[test]
    fn test_class_sets() {
        for class in ClassId::SUPPORTED {
            assert!(class.is_numeric());
            assert!(class.is_supported());
        }

        assert!(ClassId::Int64.is_numeric());
        assert!(!ClassId::Int64.is_supported());
        assert!(!ClassId::Uint64.is_supported());

        assert!(!ClassId::Logical.is_numeric());
        assert!(!ClassId::Char.is_numeric());
        assert!(!ClassId::Cell.is_supported());
    }

    #[test]
    fn test_element_size() {
        assert_eq!(ClassId::Double.element_size(), Some(8));
        assert_eq!(ClassId::Single.element_size(), Some(4));
        assert_eq!(ClassId::Uint16.element_size(), Some(2));
        assert_eq!(ClassId::Int8.element_size(), Some(1));
        assert_eq!(ClassId::Uint64.element_size(), Some(8));
        assert_eq!(ClassId::Logical.element_size(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ClassId::Double.to_string(), "double");
        assert_eq!(ClassId::Uint32.to_string(), "uint32");
        assert_eq!(ClassId::Function.to_string(), "function");
    }
}
