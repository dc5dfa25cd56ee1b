//! Shorthand constructors for descriptors.
//!
//! ```
//! use typenv::e;
//!
//! let port = e::number().with_default(8080);
//! let debug = e::boolean().optional();
//! let name = e::string();
//! # let _ = (port, debug, name);
//! ```

use crate::descriptor::{Bool, ConfigDescriptor, Num, Str};

/// A required string variable.
pub fn string() -> ConfigDescriptor<Str> {
    ConfigDescriptor::new()
}

/// A required numeric variable.
pub fn number() -> ConfigDescriptor<Num> {
    ConfigDescriptor::new()
}

/// A required boolean variable.
pub fn boolean() -> ConfigDescriptor<Bool> {
    ConfigDescriptor::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ValueType;

    #[test]
    fn test_factories_produce_required_descriptors() {
        assert_eq!(string().value_type(), ValueType::String);
        assert_eq!(number().value_type(), ValueType::Number);
        assert_eq!(boolean().value_type(), ValueType::Boolean);
        assert!(string().is_required() && number().is_required() && boolean().is_required());
        assert!(number().default_value().is_none());
    }
}
