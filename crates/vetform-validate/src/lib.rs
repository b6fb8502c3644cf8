//! Field validation engine for the clinic's entity forms.
//!
//! The engine classifies one field value at a time as accepted or rejected,
//! producing a human-readable message on rejection. It is driven entirely by
//! the declarative rule tables in `vetform-rules`; there is no per-screen
//! validation code and no hidden state.
//!
//! Contract (mirrored by the UI's on-change/on-blur/on-submit wiring):
//!
//! ```
//! use vetform_model::{FormMode, FormSnapshot};
//! use vetform_rules::Entity;
//! use vetform_validate::RuleEngine;
//!
//! let engine = RuleEngine::new();
//! let snapshot = FormSnapshot::new().with("nombre", "Juan");
//! let message = engine.validate_message(
//!     Entity::Owner, "nombre", "Juan", &snapshot, FormMode::Create,
//! );
//! assert!(message.is_empty());
//! ```

pub mod checks;
mod engine;
mod report;

pub use engine::RuleEngine;
pub use report::{ReportPayload, write_report_json};

/// Stable rule codes carried on every issue.
pub mod codes {
    pub const REQUIRED: &str = "VF-REQ";
    pub const LENGTH: &str = "VF-LEN";
    pub const CHAR_CLASS: &str = "VF-CLASS";
    pub const ONE_OF: &str = "VF-ONEOF";
    pub const MARKUP: &str = "VF-MARKUP";
    pub const SQL_META: &str = "VF-SQL";
    pub const PHONE: &str = "VF-PHONE";
    pub const EMAIL: &str = "VF-EMAIL";
    pub const ADDRESS: &str = "VF-ADDR";
    pub const MATCH: &str = "VF-MATCH";
    pub const DOCUMENT: &str = "VF-DOC";
    pub const PASSWORD: &str = "VF-PASS";
    pub const NUMERIC: &str = "VF-NUM";
    pub const DECIMAL: &str = "VF-DEC";
}
