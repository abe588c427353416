//! Decoding of the `inc_votes` delta sent with `PATCH /reviews/{id}`.

use serde_json::Value;

use crate::error::CoreError;
use crate::messages;

/// Resolve the raw `inc_votes` value into an integer delta.
///
/// An absent or `null` delta is a zero increment. Any JSON number is
/// accepted and rounded half away from zero, the same way Postgres assigns
/// a numeric to an `INTEGER` column. Numbers outside the `i32` range are
/// out of range; strings, booleans and containers are not numbers at all.
/// Neither case touches the store.
pub fn parse_vote_delta(raw: Option<&Value>) -> Result<i32, CoreError> {
    match raw {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => {
            let rounded = match n.as_i64() {
                Some(v) => Some(v),
                None => n.as_f64().map(f64::round).and_then(float_to_i64),
            };
            rounded
                .and_then(|v| i32::try_from(v).ok())
                .ok_or(CoreError::InvalidInput(messages::VOTES_OUT_OF_RANGE))
        }
        Some(_) => Err(CoreError::InvalidInput(messages::DELTA_NOT_A_NUMBER)),
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    // Beyond this bound the value is out of range for i32 anyway.
    (v.abs() < 1e15).then_some(v as i64)
}
