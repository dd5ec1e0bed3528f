use tracing::warn;

use crate::host::StyleScope;
use crate::mapping::{ColorMapping, is_unset};

/// Push every key of `mapping` onto `scope` as `<prefix><key>`.
///
/// Set keys become inline custom properties; unset keys are removed so the
/// stylesheet default shows through. Always re-applies all six keys. A
/// failing property is logged and skipped.
pub fn apply_all<C>(mapping: &ColorMapping, scope: &mut C, prefix: &str)
where
    C: StyleScope + ?Sized,
{
    for (key, value) in mapping.iter() {
        let name = key.property_name(prefix);
        let result = if is_unset(value) {
            scope.remove_property(&name)
        } else {
            scope.set_property(&name, value)
        };
        if let Err(err) = result {
            warn!(property = %name, error = %err, "failed to apply theme color");
        }
    }
}
