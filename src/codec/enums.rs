//! Enum Tables
//!
//! Bidirectional name/number lookup for the engine's fixed enumerations.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Result, ValidatorError};

/// Name carried by plain records when the engine reports a number the table
/// does not know. Seeing it means the engine and this crate disagree on the
/// schema.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Immutable bijection between enum names and their wire numbers
#[derive(Debug, Clone)]
pub struct EnumTable {
    name_by_number: HashMap<i32, &'static str>,
    number_by_name: HashMap<&'static str, i32>,
}

impl EnumTable {
    /// Build a table from `(name, number)` pairs.
    ///
    /// Fails if a name or a number appears twice, since the table would no
    /// longer be invertible.
    pub fn from_definition(definition: &[(&'static str, i32)]) -> Result<Self> {
        let mut name_by_number = HashMap::with_capacity(definition.len());
        let mut number_by_name = HashMap::with_capacity(definition.len());

        for &(name, number) in definition {
            if name_by_number.insert(number, name).is_some() {
                return Err(ValidatorError::InvalidEnumTable(format!(
                    "number {number} is defined more than once"
                )));
            }
            if number_by_name.insert(name, number).is_some() {
                return Err(ValidatorError::InvalidEnumTable(format!(
                    "name '{name}' is defined more than once"
                )));
            }
        }

        Ok(Self {
            name_by_number,
            number_by_name,
        })
    }

    /// Name for a wire number, `None` if the number is unknown
    pub fn name_of(&self, number: i32) -> Option<&'static str> {
        self.name_by_number.get(&number).copied()
    }

    /// Wire number for a name, `None` if the name is unknown
    pub fn number_of(&self, name: &str) -> Option<i32> {
        self.number_by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.name_by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_by_number.is_empty()
    }

    /// All `(name, number)` pairs, ordered by number
    pub fn entries(&self) -> Vec<(&'static str, i32)> {
        let mut entries: Vec<_> = self
            .number_by_name
            .iter()
            .map(|(name, number)| (*name, *number))
            .collect();
        entries.sort_by_key(|&(_, number)| number);
        entries
    }
}

/// `ValidationResult.Status`
pub const STATUS_DEFINITION: &[(&str, i32)] = &[("UNKNOWN", 0), ("PASS", 1), ("FAIL", 2)];

/// `ValidationError.Severity`
pub const SEVERITY_DEFINITION: &[(&str, i32)] =
    &[("UNKNOWN_SEVERITY", 0), ("ERROR", 1), ("WARNING", 4)];

/// `ValidationError.Code`
pub const CODE_DEFINITION: &[(&str, i32)] = &[
    ("UNKNOWN_CODE", 0),
    ("MANDATORY_TAG_MISSING", 1),
    ("DISALLOWED_TAG", 2),
    ("DISALLOWED_ATTR", 3),
    ("INVALID_ATTR_VALUE", 4),
    ("MANDATORY_ATTR_MISSING", 5),
    ("DUPLICATE_UNIQUE_TAG", 6),
    ("WRONG_PARENT_TAG", 7),
    ("STYLESHEET_TOO_LONG", 8),
    ("MANDATORY_CDATA_MISSING_OR_INCORRECT", 9),
    ("CDATA_VIOLATES_DENYLIST", 30),
    ("DISALLOWED_PROPERTY_IN_ATTR_VALUE", 11),
    ("MISSING_URL", 12),
    ("INVALID_URL", 13),
    ("INVALID_URL_PROTOCOL", 14),
    ("DEPRECATED_TAG", 15),
    ("DEPRECATED_ATTR", 16),
    ("MANDATORY_PROPERTY_MISSING_FROM_ATTR_VALUE", 17),
    ("INVALID_PROPERTY_VALUE_IN_ATTR_VALUE", 18),
    ("MUTUALLY_EXCLUSIVE_ATTRS", 19),
    ("UNESCAPED_TEMPLATE_IN_ATTR_VALUE", 20),
    ("TEMPLATE_PARTIAL_IN_ATTR_VALUE", 21),
    ("TEMPLATE_IN_ATTR_NAME", 22),
    ("INCONSISTENT_UNITS_FOR_WIDTH_AND_HEIGHT", 23),
    ("TAG_REQUIRED_BY_MISSING", 24),
    ("IMPLIED_LAYOUT_INVALID", 25),
    ("SPECIFIED_LAYOUT_INVALID", 26),
    ("ATTR_VALUE_REQUIRED_BY_LAYOUT", 27),
    ("MANDATORY_ONEOF_ATTR_MISSING", 28),
    ("CSS_SYNTAX_INVALID_AT_RULE", 29),
    ("ATTR_MISSING_REQUIRED_EXTENSION", 31),
    ("DISALLOWED_PROPERTY_IN_ATTR_VALUE_OF_TAG", 32),
    ("CSS_SYNTAX_STRAY_TRAILING_BACKSLASH", 34),
    ("CSS_SYNTAX_UNTERMINATED_COMMENT", 35),
    ("CSS_SYNTAX_UNTERMINATED_STRING", 36),
    ("CSS_SYNTAX_BAD_URL", 37),
    ("CSS_SYNTAX_EOF_IN_PRELUDE_OF_QUALIFIED_RULE", 38),
    ("CSS_SYNTAX_INVALID_DECLARATION", 39),
    ("CSS_SYNTAX_INCOMPLETE_DECLARATION", 40),
    ("CSS_SYNTAX_ERROR_IN_PSEUDO_SELECTOR", 41),
    ("CSS_SYNTAX_MISSING_SELECTOR", 42),
    ("CSS_SYNTAX_NOT_A_SELECTOR_START", 43),
    ("CSS_SYNTAX_UNPARSED_INPUT_REMAINS_IN_SELECTOR", 44),
    ("CSS_SYNTAX_MISSING_URL", 45),
    ("CSS_SYNTAX_DISALLOWED_DOMAIN", 46),
    ("CSS_SYNTAX_INVALID_URL", 47),
    ("CSS_SYNTAX_INVALID_URL_PROTOCOL", 48),
    ("CSS_SYNTAX_DISALLOWED_RELATIVE_URL", 49),
    ("INCORRECT_NUM_CHILD_TAGS", 56),
    ("DISALLOWED_CHILD_TAG_NAME", 57),
    ("DISALLOWED_FIRST_CHILD_TAG_NAME", 58),
    ("CSS_SYNTAX_INVALID_ATTR_SELECTOR", 59),
    ("DUPLICATE_DIMENSION", 60),
    ("ATTR_REQUIRED_BUT_MISSING", 61),
    ("DISALLOWED_TAG_ANCESTOR", 62),
    ("MANDATORY_TAG_ANCESTOR", 63),
    ("MANDATORY_TAG_ANCESTOR_WITH_HINT", 64),
    ("ATTR_DISALLOWED_BY_SPECIFIED_LAYOUT", 65),
    ("WARNING_TAG_REQUIRED_BY_MISSING", 77),
    ("WARNING_EXTENSION_UNUSED", 79),
    ("DISALLOWED_STYLE_ATTR", 81),
    ("EXTENSION_UNUSED", 84),
    ("DISALLOWED_SCRIPT_TAG", 88),
    ("DUPLICATE_ATTRIBUTE", 94),
    ("MANDATORY_ANYOF_ATTR_MISSING", 104),
    ("INVALID_DOCTYPE_HTML", 111),
    ("WARNING_EXTENSION_DEPRECATED_VERSION", 131),
];

/// Status table, built on first use
pub static STATUS: LazyLock<EnumTable> = LazyLock::new(|| builtin(STATUS_DEFINITION));

/// Severity table, built on first use
pub static SEVERITY: LazyLock<EnumTable> = LazyLock::new(|| builtin(SEVERITY_DEFINITION));

/// Code table, built on first use
pub static CODE: LazyLock<EnumTable> = LazyLock::new(|| builtin(CODE_DEFINITION));

fn builtin(definition: &[(&'static str, i32)]) -> EnumTable {
    // The built-in definitions are checked by the tests below.
    EnumTable::from_definition(definition).expect("built-in enum definition is a bijection")
}
