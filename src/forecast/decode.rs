//! Grouping of the flat forecast item list into per-timestamp slots.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// One raw item from the upstream payload. Every field is optional so a
/// single malformed item can be skipped without failing the batch.
#[derive(Debug, Deserialize)]
struct FcstItem {
    category: Option<String>,
    #[serde(rename = "fcstTime")]
    fcst_time: Option<String>,
    #[serde(rename = "fcstValue")]
    fcst_value: Option<Value>,
}

/// All category values reported for one forecast time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    /// 4-digit HHMM forecast time.
    pub time: String,
    pub values: HashMap<String, String>,
}

/// Group raw items by forecast time, preserving first-seen time order.
///
/// Items missing any of category/fcstTime/fcstValue are dropped one by one;
/// the rest of the batch is unaffected.
pub fn group_by_time(items: &[Value]) -> Vec<TimeSlot> {
    let mut slots: Vec<TimeSlot> = Vec::new();

    for raw in items {
        let item: FcstItem = match serde_json::from_value(raw.clone()) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping malformed forecast item: {}", e);
                continue;
            }
        };

        let (Some(category), Some(time), Some(value)) =
            (item.category, item.fcst_time, item.fcst_value)
        else {
            warn!("Skipping forecast item with missing field");
            continue;
        };

        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                warn!("Skipping forecast item with non-scalar value: {}", other);
                continue;
            }
        };

        match slots.iter_mut().find(|slot| slot.time == time) {
            Some(slot) => {
                slot.values.insert(category, value);
            }
            None => {
                let mut values = HashMap::new();
                values.insert(category, value);
                slots.push(TimeSlot { time, values });
            }
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(cate: &str, time: &str, value: &str) -> Value {
        json!({ "category": cate, "fcstTime": time, "fcstValue": value })
    }

    #[test]
    fn empty_input_gives_empty_bucket() {
        assert!(group_by_time(&[]).is_empty());
    }

    #[test]
    fn one_time_collects_all_categories() {
        let items = vec![
            item("SKY", "1400", "1"),
            item("T1H", "1400", "23.5"),
            item("REH", "1400", "40"),
        ];
        let slots = group_by_time(&items);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].time, "1400");
        assert_eq!(slots[0].values.len(), 3);
        assert_eq!(slots[0].values["T1H"], "23.5");
    }

    #[test]
    fn slot_order_follows_first_seen_time() {
        let items = vec![
            item("SKY", "1500", "1"),
            item("SKY", "1400", "3"),
            item("T1H", "1500", "20"),
        ];
        let slots = group_by_time(&items);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].time, "1500");
        assert_eq!(slots[1].time, "1400");
        assert_eq!(slots[0].values.len(), 2);
    }

    #[test]
    fn items_with_missing_fields_are_skipped_individually() {
        let items = vec![
            json!({ "fcstTime": "1400", "fcstValue": "1" }),
            json!({ "category": "T1H", "fcstValue": "23.5" }),
            json!({ "category": "REH", "fcstTime": "1400" }),
            item("SKY", "1400", "1"),
        ];
        let slots = group_by_time(&items);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].values.len(), 1);
        assert_eq!(slots[0].values["SKY"], "1");
    }

    #[test]
    fn numeric_values_are_stringified() {
        let items = vec![json!({ "category": "REH", "fcstTime": "1400", "fcstValue": 40 })];
        let slots = group_by_time(&items);
        assert_eq!(slots[0].values["REH"], "40");
    }
}
