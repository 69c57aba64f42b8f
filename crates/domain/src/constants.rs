//! Connector constants
//!
//! Centralized location for protocol names, limits and defaults shared by
//! the core and infrastructure crates.

// Endpoint and protocol
pub const DEFAULT_ENDPOINT: &str =
    "https://ws5.responsys.net/webservices/services/ResponsysWSService";
pub const SERVICE_NAMESPACE: &str = "urn:ws.rsys.com";
pub const SESSION_HEADER: &str = "SessionHeader";
pub const SESSION_COOKIE: &str = "JSESSIONID";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fault code used when the HTTP exchange itself fails (no SOAP fault body).
pub const HTTP_FAULT_CODE: &str = "HTTP";

// Per-call limits
pub const MAX_IDS_PER_CALL: usize = 200;
pub const MIN_IDS_PER_CALL: usize = 1;

// Fault codes the document upsert recovers from
pub const FOLDER_NOT_FOUND: &str = "FOLDER_NOT_FOUND";
pub const DOCUMENT_ALREADY_EXISTS: &str = "DOCUMENT_ALREADY_EXISTS";

/// Folders whose name starts with this marker are system folders.
pub const SYSTEM_FOLDER_PREFIX: char = '!';

// Column defaults
pub const DEFAULT_MATCH_COLUMN: &str = "CUSTOMER_ID_";
pub const DEFAULT_PROFILE_MATCH_COLUMN: &str = "CUSTOMER_ID";
pub const DEFAULT_FIELD_LIST: [&str; 2] = ["RIID_", "EMAIL_ADDRESS_"];
pub const EMAIL_ADDRESS_COLUMN: &str = "EMAIL_ADDRESS_";

// Storefront defaults
pub const DEFAULT_WELCOME_EVENT: &str = "onlinesignup";
pub const DEFAULT_LOG_FILE: &str = "responsys.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
