//! Sample datasets
//!
//! Three claims with two note sets (claim 1002 deliberately has none), in
//! the exact wire shape the production datasets use.

use std::path::{Path, PathBuf};

pub const SAMPLE_CLAIMS_JSON: &str = r#"[
    {
        "id": 1001,
        "policyNumber": "POL-88421",
        "type": "Auto",
        "status": "Open",
        "lossDate": "2024-01-15",
        "insuredName": "Dana Whitfield",
        "amountClaimed": 12840.55,
        "amountReserved": 9000.00,
        "lastUpdated": "2024-02-01T10:30:00Z"
    },
    {
        "id": 1002,
        "policyNumber": "POL-11203",
        "type": "Property",
        "status": "UnderReview",
        "lossDate": "2023-11-02",
        "insuredName": "Luis Ortega",
        "amountClaimed": 48200.00,
        "amountReserved": 30000.00,
        "lastUpdated": "2024-01-20T16:45:00Z"
    },
    {
        "id": 1003,
        "policyNumber": "POL-77310",
        "type": "Liability",
        "status": "Closed",
        "lossDate": "2023-06-30",
        "insuredName": "Priya Raman",
        "amountClaimed": 5300.25,
        "amountReserved": 0,
        "lastUpdated": "2023-09-14T09:00:00Z"
    }
]"#;

pub const SAMPLE_NOTES_JSON: &str = r#"[
    {
        "id": 1001,
        "notes": [
            {"author": "intake", "text": "First notice of loss received by phone"},
            {"author": "adjuster", "text": "Requested photos of vehicle damage"}
        ]
    },
    {
        "id": 1003,
        "notes": [
            {"author": "legal", "text": "Settlement executed, file closed"}
        ]
    }
]"#;

/// Writes the sample datasets into `dir` and returns their paths.
pub fn write_datasets(dir: &Path) -> (PathBuf, PathBuf) {
    let claims_path = dir.join("claims.json");
    let notes_path = dir.join("notes.json");
    std::fs::write(&claims_path, SAMPLE_CLAIMS_JSON).expect("write claims fixture");
    std::fs::write(&notes_path, SAMPLE_NOTES_JSON).expect("write notes fixture");
    (claims_path, notes_path)
}
