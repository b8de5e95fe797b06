//! Override-merge of configuration documents.

use super::model::ConfigDocument;
use serde_yaml::{Mapping, Value};

/// Merge documents in order; later documents win at matching keys.
///
/// Nested mappings are merged key by key. Scalars, sequences and nulls in a
/// later document replace the earlier value outright. A key keeps the position
/// of its first appearance, so action order is encounter order.
pub fn merge_documents(documents: Vec<ConfigDocument>) -> Mapping {
    let mut merged = Mapping::new();
    for document in documents {
        tracing::trace!(path = %document.path.display(), "merging cache configuration");
        merge_mapping(&mut merged, document.root);
    }
    merged
}

/// Merge `overlay` into `base` in place.
pub fn merge_mapping(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(Value::Mapping(existing)) if value.is_mapping() => {
                if let Value::Mapping(incoming) = value {
                    merge_mapping(existing, incoming);
                }
            }
            Some(slot) => *slot = value,
            None => {
                base.insert(key, value);
            }
        }
    }
}
