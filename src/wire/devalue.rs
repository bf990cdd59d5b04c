//! Decoder for the flattened object-graph serialization used by the vendor's
//! catalog document (a SvelteKit `devalue` payload, as served at
//! `/auction-house/__data.json`).
//!
//! The payload is a JSON array of values. Entries reference each other by
//! array index, negative indices encode sentinel scalars, and index `0` is
//! the root. [`unflatten`] rebuilds the plain JSON object graph.

use serde_json::{Map, Value};

use crate::error::{MarketError, Result};

const UNDEFINED: i64 = -1;
const NAN: i64 = -2;
const POSITIVE_INFINITY: i64 = -3;
const NEGATIVE_INFINITY: i64 = -4;
const NEGATIVE_ZERO: i64 = -5;

/// Reconstitute a flattened payload.
///
/// Sentinel notes: `undefined` hydrates to null, and so do the non-finite
/// number sentinels, since JSON has no representation for them. Shared
/// subtrees (the same index referenced twice) hydrate to equal values;
/// cyclic references are rejected, since they have no plain-JSON form.
/// `Date`, `Set`, `Map`, null-prototype-object and `BigInt` wrappers are
/// supported; typed-array wrappers are rejected as unsupported (the catalog
/// payload contains none).
pub fn unflatten(parsed: &Value) -> Result<Value> {
    let values = match parsed.as_array() {
        Some(values) if !values.is_empty() => values,
        _ => {
            return Err(MarketError::Wire(
                "flattened payload must be a non-empty array".into(),
            ))
        }
    };
    let mut decoder = Decoder {
        values,
        hydrated: vec![Slot::Empty; values.len()],
    };
    decoder.hydrate(0)
}

/// Memo state per payload index. `InProgress` marks an index currently being
/// hydrated higher up the recursion, so re-entering it is a cycle.
#[derive(Clone)]
enum Slot {
    Empty,
    InProgress,
    Done(Value),
}

struct Decoder<'a> {
    values: &'a [Value],
    hydrated: Vec<Slot>,
}

impl Decoder<'_> {
    fn hydrate_ref(&mut self, reference: &Value) -> Result<Value> {
        let index = reference.as_i64().ok_or_else(|| {
            MarketError::Wire(format!("reference must be an integer index, got {reference}"))
        })?;
        self.hydrate(index)
    }

    fn hydrate(&mut self, index: i64) -> Result<Value> {
        match index {
            UNDEFINED | NAN | POSITIVE_INFINITY | NEGATIVE_INFINITY => return Ok(Value::Null),
            NEGATIVE_ZERO => return Ok(Value::from(-0.0)),
            _ => {}
        }

        let idx = usize::try_from(index)
            .map_err(|_| MarketError::Wire(format!("invalid sentinel index {index}")))?;
        // `hydrated` is sized to the payload, so this is also the bounds check.
        match self.hydrated.get(idx) {
            None => {
                return Err(MarketError::Wire(format!("reference {index} out of range")));
            }
            Some(Slot::Done(done)) => return Ok(done.clone()),
            Some(Slot::InProgress) => {
                return Err(MarketError::Wire(format!(
                    "cyclic reference through index {index}"
                )));
            }
            Some(Slot::Empty) => {}
        }
        self.hydrated[idx] = Slot::InProgress;
        let value = self.values[idx].clone();

        let result = match &value {
            Value::Array(entries) => self.hydrate_array(entries)?,
            Value::Object(fields) => {
                let mut object = Map::with_capacity(fields.len());
                for (key, reference) in fields {
                    object.insert(key.clone(), self.hydrate_ref(reference)?);
                }
                Value::Object(object)
            }
            scalar => scalar.clone(),
        };

        self.hydrated[idx] = Slot::Done(result.clone());
        Ok(result)
    }

    /// An array whose first entry is a string is a typed wrapper; anything
    /// else is a plain array of references, with JSON nulls marking holes.
    fn hydrate_array(&mut self, entries: &[Value]) -> Result<Value> {
        if let Some(tag) = entries.first().and_then(Value::as_str) {
            let tag = tag.to_string();
            return self.hydrate_wrapper(&tag, &entries[1..]);
        }

        let mut array = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.is_null() {
                array.push(Value::Null);
            } else {
                array.push(self.hydrate_ref(entry)?);
            }
        }
        Ok(Value::Array(array))
    }

    fn hydrate_wrapper(&mut self, tag: &str, rest: &[Value]) -> Result<Value> {
        match tag {
            // Dates are carried as their ISO string payload verbatim.
            "Date" => rest
                .first()
                .cloned()
                .ok_or_else(|| MarketError::Wire("Date wrapper missing payload".into())),
            "Set" => {
                let mut members = Vec::with_capacity(rest.len());
                for reference in rest {
                    members.push(self.hydrate_ref(reference)?);
                }
                Ok(Value::Array(members))
            }
            // Maps and null-prototype objects both carry alternating
            // key/value references and hydrate to a plain object.
            "Map" | "null" => {
                let mut object = Map::new();
                for pair in rest.chunks(2) {
                    let [key_ref, value_ref] = pair else {
                        return Err(MarketError::Wire(format!(
                            "{tag} wrapper has a dangling key"
                        )));
                    };
                    let key = match self.hydrate_ref(key_ref)? {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    object.insert(key, self.hydrate_ref(value_ref)?);
                }
                Ok(Value::Object(object))
            }
            "BigInt" => {
                let digits = rest.first().and_then(Value::as_str).ok_or_else(|| {
                    MarketError::Wire("BigInt wrapper missing digit string".into())
                })?;
                Ok(digits
                    .parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(digits.to_string())))
            }
            other => Err(MarketError::Wire(format!(
                "unsupported wrapper type '{other}'"
            ))),
        }
    }
}
