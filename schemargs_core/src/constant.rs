pub(crate) const FLAG_MARKER: char = '-';
pub(crate) const SCHEMA_SEPARATOR: char = ',';

pub(crate) const BOOLEAN_SUFFIX: &str = "";
pub(crate) const STRING_SUFFIX: &str = "*";
pub(crate) const INTEGER_SUFFIX: &str = "#";
pub(crate) const DOUBLE_SUFFIX: &str = "##";
