use super::catalog::SettingKey;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("`{value}` is not in the {key} catalog")]
    UnknownValue { key: SettingKey, value: String },

    #[error("`{0}` is not a design setting")]
    UnknownKey(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("document root is unavailable")]
    NoDocument,

    #[error("failed to write `{name}`: {reason}")]
    Rejected { name: String, reason: String },
}
