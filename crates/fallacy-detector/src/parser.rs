//! Normalize the classifier's raw reply into predictions

use crate::error::DetectorError;
use fallacy_domain::{Label, Prediction};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse the raw reply and keep only well-formed predictions
///
/// Expected shape: `{"results": [{"index": 1, "label": "...", "confidence": 0.9}]}`
/// with 1-based indices. Items with an index outside `[0, num_sentences)`
/// (after conversion to 0-based) or a label outside the vocabulary are
/// dropped. Output order is the reply's order.
pub fn parse_classifier_response(
    response: &str,
    num_sentences: usize,
) -> Result<Vec<Prediction>, DetectorError> {
    let json = parse_with_recovery(response)?;

    let object = json.as_object().ok_or_else(|| {
        DetectorError::Parse("Expected a JSON object at the top level".to_string())
    })?;

    let items: &[Value] = match object.get("results") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            warn!("'results' is not an array, treating as empty");
            &[]
        }
        None => &[],
    };

    let predictions: Vec<Prediction> = items
        .iter()
        .filter_map(|item| match normalize_item(item, num_sentences) {
            Ok(prediction) => Some(prediction),
            Err(reason) => {
                debug!("Dropping prediction: {}", reason);
                None
            }
        })
        .collect();

    debug!(
        "Kept {} of {} predictions",
        predictions.len(),
        items.len()
    );

    Ok(predictions)
}

/// Parse as JSON; on failure retry on the text between the first `{` and last `}`
fn parse_with_recovery(response: &str) -> Result<Value, DetectorError> {
    match serde_json::from_str(response) {
        Ok(value) => Ok(value),
        Err(original) => match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if end > start => {
                debug!("Reply is not bare JSON, retrying on the outer braces");
                Ok(serde_json::from_str(&response[start..=end])?)
            }
            _ => Err(original.into()),
        },
    }
}

fn normalize_item(item: &Value, num_sentences: usize) -> Result<Prediction, String> {
    let obj = item
        .as_object()
        .ok_or_else(|| "item is not an object".to_string())?;

    let index = coerce_index(obj)
        .and_then(|one_based| one_based.checked_sub(1))
        .and_then(|zero_based| usize::try_from(zero_based).ok())
        .filter(|&i| i < num_sentences)
        .ok_or_else(|| format!("index {:?} out of range", obj.get("index")))?;

    let label = obj
        .get("label")
        .and_then(Value::as_str)
        .map(str::trim)
        .and_then(Label::parse)
        .ok_or_else(|| format!("label {:?} not in vocabulary", obj.get("label")))?;

    let confidence = obj.get("confidence").and_then(coerce_f64).unwrap_or(0.0);

    Ok(Prediction::new(index, label, confidence))
}

/// Integer index from numbers (floats truncate), integer strings, or booleans.
/// A missing index reads as 0, which is out of range once made 0-based.
fn coerce_index(obj: &Map<String, Value>) -> Option<i64> {
    match obj.get("index") {
        None => Some(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        Some(_) => None,
    }
}

/// Float from numbers, numeric strings, or booleans
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
