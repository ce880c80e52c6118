use std::fmt;

// === SettingsError ===

/// Errors related to loading or saving the configuration file.
#[derive(Debug)]
pub enum SettingsError {
    /// File system operation failed.
    IoError(String),
    /// JSON serialization or deserialization failed.
    SerializationError(String),
    /// A value parsed but cannot be used by the player.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::Invalid { field, reason } => {
                write!(f, "Invalid setting {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === StyleError ===

/// Errors raised when a posted style value does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The value is not one of the options offered for the field.
    UnknownOption { field: String, value: String },
    /// The field is not one of the four style fields.
    UnknownField(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownOption { field, value } => {
                write!(f, "Unknown option for {}: {}", field, value)
            }
            StyleError::UnknownField(field) => write!(f, "Unknown style field: {}", field),
        }
    }
}

impl std::error::Error for StyleError {}

// === IpcError ===

/// Errors related to messages posted by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcError {
    /// The message is not a JSON object with a `cmd` string.
    Malformed(String),
    /// A required field is missing or has the wrong type.
    MissingField(String),
    /// A field is present but its value is out of range for it.
    InvalidField { field: String, value: String },
    /// The command is not understood.
    UnknownCommand(String),
    /// A selection carried an invalid field or value.
    Style(StyleError),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::Malformed(msg) => write!(f, "Malformed IPC message: {}", msg),
            IpcError::MissingField(field) => write!(f, "Missing IPC field: {}", field),
            IpcError::InvalidField { field, value } => {
                write!(f, "Invalid value for IPC field {}: {}", field, value)
            }
            IpcError::UnknownCommand(cmd) => write!(f, "Unknown IPC command: {}", cmd),
            IpcError::Style(err) => write!(f, "Invalid selection: {}", err),
        }
    }
}

impl std::error::Error for IpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IpcError::Style(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StyleError> for IpcError {
    fn from(err: StyleError) -> Self {
        IpcError::Style(err)
    }
}

// === AssetError ===

/// Errors related to serving the configured media files.
#[derive(Debug)]
pub enum AssetError {
    /// The requested path does not name an asset.
    NotFound(String),
    /// The asset file could not be read.
    Io(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::Io(msg) => write!(f, "Asset I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}
