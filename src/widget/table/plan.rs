//! Inline-edit patch planning
//!
//! Pure translation of server responses into cell patches, kept separate
//! from the DOM glue so the correlation rules are testable on the host. The
//! bulk plan is all-or-nothing: a response whose `objects` array does not
//! line up with the request is rejected before any cell is touched.

use std::collections::BTreeMap;

use crate::error::AdminError;
use crate::protocol::InlineObject;

/// One cell replacement, addressed by the stable `(obj_id, property)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPatch {
    pub obj_id: String,
    pub property: String,
    pub html: String,
}

/// Patches for a single row's `inline_properties` map.
pub fn single_row(obj_id: &str, inline_properties: &BTreeMap<String, String>) -> Vec<CellPatch> {
    inline_properties
        .iter()
        .map(|(property, html)| CellPatch {
            obj_id: obj_id.to_string(),
            property: property.clone(),
            html: html.clone(),
        })
        .collect()
}

/// Patches for a bulk response, correlated with the requested `obj_ids`.
///
/// `objects[i]` belongs to `obj_ids[i]`. A length mismatch means the
/// correlation is unknowable, so the whole patch is refused rather than
/// applied to the matched prefix.
pub fn bulk(obj_ids: &[String], objects: &[InlineObject]) -> Result<Vec<CellPatch>, AdminError> {
    if obj_ids.len() != objects.len() {
        return Err(AdminError::Correlation {
            requested: obj_ids.len(),
            received: objects.len(),
        });
    }
    Ok(obj_ids
        .iter()
        .zip(objects)
        .flat_map(|(obj_id, object)| single_row(obj_id, &object.inline_properties))
        .collect())
}
