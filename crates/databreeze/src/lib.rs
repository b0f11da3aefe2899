//! # databreeze
//!
//! Default-filling drill-down through nested records.
//! Walk a key path through JSON or YAML documents, one record or a batch
//! at a time, and get the fallback value wherever a key is missing instead
//! of an error.
//!
//! ```
//! use databreeze::{drill_many, drill_one_or_absent};
//! use serde_json::json;
//!
//! let tony = json!({"name": "Tony", "contact": {"phone": 878787878, "city": "Madrid"}});
//! let marta = json!({"name": "Marta", "contact": {"city": "Madrid"}});
//!
//! assert_eq!(drill_one_or_absent(&tony, ["contact", "phone"]), &json!(878787878));
//! assert!(drill_one_or_absent(&marta, ["contact", "phone"]).is_null());
//!
//! let missing = json!("Missing Data");
//! let records = [tony, marta];
//! assert_eq!(
//!     drill_many(&records, ["contact", "phone"], &missing),
//!     vec![&json!(878787878), &missing],
//! );
//! ```

pub mod drill;
pub mod node;

pub use databreeze_core::{DrillConfig, Key, KeyPath, PathError};
pub use drill::{
    drill, drill_field, drill_many, drill_many_or_absent, drill_one, drill_one_or_absent, probe,
    Batch, DrillStats, Drilled, Driller,
};
pub use node::Node;
