//! Static field value recovery.
//!
//! Recovers the value a static field will hold once its type's initializer has run,
//! without executing anything. Two paths, tried in order:
//!
//! 1. The metadata constant table. Always correct when present; covers literals the
//!    compiler embedded directly in metadata.
//! 2. A single linear scan of the type's static initializer (`.cctor`): the scan
//!    tracks only the most recent `ldstr` and returns it when a `stsfld` targeting
//!    the requested field appears. Last write to the slot wins; there is no
//!    evaluation-stack model, no branch analysis, and no tracking of other fields.
//!
//! The scan is a deliberate heuristic tuned for compiler-emitted initializers where
//! a string is loaded immediately before it is stored. Initializers that compute
//! values, store non-string constants through dedicated opcodes, or interleave
//! stores resolve to `None`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    format::{
        instruction::{Opcode, Operand},
        records::{Constant, FieldAttributes, RawField, RawType},
    },
    metadata::Assembly,
};

/// Name of the static initializer method that runs once per type
const STATIC_INITIALIZER: &str = ".cctor";

/// Resolve the value of `field` as declared on `parent`.
///
/// `None` means unresolved: no constant-table entry and either the field is not
/// static, the type has no `.cctor`, or the scan found no usable store.
pub(crate) fn resolve(parent: &RawType, field: &RawField) -> Option<Constant> {
    if let Some(constant) = &field.constant {
        return Some(constant.clone());
    }

    if !FieldAttributes::from_raw(field.flags).contains(FieldAttributes::STATIC) {
        // Instance field without a constant: nothing to scan.
        return None;
    }

    let cctor = parent.methods.iter().find(|m| m.name == STATIC_INITIALIZER)?;

    let mut last_string: Option<&str> = None;
    for inst in &cctor.body {
        match (&inst.opcode, &inst.operand) {
            (Opcode::Ldstr, Operand::String(value)) => last_string = Some(value),
            (Opcode::Stsfld, Operand::Field(target)) if target.name == field.name => {
                log::debug!(
                    "resolved {}::{} from .cctor store at IL_{:04x}",
                    parent.name,
                    field.name,
                    inst.offset
                );
                return last_string.map(|s| Constant::String(s.to_string()));
            }
            _ => {}
        }
    }

    None
}

/// Resolve every static field of the assembly into a flat key/value map.
///
/// Keys are `Type::Field` full names, or bare field names when `type_filter`
/// restricts the extraction to a single type (matched by exact simple name).
/// Values are the resolved constant rendered as a string, or `null` when the
/// field stays unresolved. Key order follows declaration order.
#[must_use]
pub fn extract_statics(assembly: &Assembly, type_filter: Option<&str>) -> Map<String, Value> {
    let mut out = Map::new();

    for ty in assembly.types() {
        if let Some(filter) = type_filter {
            if ty.name() != filter {
                continue;
            }
        }

        for field in ty.fields() {
            if !field.is_static() && field.constant().is_none() {
                continue;
            }

            let key = if type_filter.is_some() {
                field.name().to_string()
            } else {
                format!("{}::{}", ty.fullname(), field.name())
            };

            let value = match field.value() {
                Some(Constant::Null) | None => Value::Null,
                Some(Constant::String(s)) => Value::String(s),
                Some(other) => Value::String(other.to_string()),
            };

            // First declaration wins for duplicate names, like every other lookup.
            out.entry(key).or_insert(value);
        }
    }

    out
}

/// Like [`extract_statics`], but with plain owned strings for callers that do not
/// want to carry a JSON document.
#[must_use]
pub fn extract_statics_plain(
    assembly: &Assembly,
    type_filter: Option<&str>,
) -> BTreeMap<String, Option<String>> {
    extract_statics(assembly, type_filter)
        .into_iter()
        .map(|(k, v)| {
            let v = match v {
                Value::String(s) => Some(s),
                _ => None,
            };
            (k, v)
        })
        .collect()
}
