use serde_json::{Map, Value, json};

use super::rpc_error::normalize_error;
use crate::types::{LogEntry, QueryOutcome};
use crate::utils::insert_some;

/// `Ok` becomes an array of projected entries, `Err` a normalized error object.
pub fn normalize_outcome(outcome: &QueryOutcome) -> Value {
    match outcome {
        QueryOutcome::Ok(entries) => Value::Array(entries.iter().map(normalize_log_entry).collect()),
        QueryOutcome::Err(error) => normalize_error(error),
    }
}

/// Project a log entry onto its nine known fields.
///
/// Absent fields stay absent and `null` fields stay `null`.
pub fn normalize_log_entry(entry: &LogEntry) -> Value {
    let mut object = Map::new();

    insert_some(
        &mut object,
        "transactionHash",
        entry.transaction_hash.to_json(|hash| json!(hash)),
    );
    insert_some(
        &mut object,
        "blockNumber",
        entry.block_number.to_json(|number| Value::from(number)),
    );
    insert_some(&mut object, "data", entry.data.to_json(|data| json!(data)));
    insert_some(
        &mut object,
        "blockHash",
        entry.block_hash.to_json(|hash| json!(hash)),
    );
    insert_some(
        &mut object,
        "transactionIndex",
        entry.transaction_index.to_json(|index| Value::from(index)),
    );
    insert_some(
        &mut object,
        "topics",
        entry.topics.to_json(|topics| json!(topics)),
    );
    insert_some(
        &mut object,
        "address",
        entry.address.to_json(|address| json!(address)),
    );
    insert_some(
        &mut object,
        "logIndex",
        entry.log_index.to_json(|index| Value::from(index)),
    );
    insert_some(
        &mut object,
        "removed",
        entry.removed.to_json(|removed| json!(removed)),
    );

    Value::Object(object)
}
