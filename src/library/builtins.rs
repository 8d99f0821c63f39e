use super::builtin;
use crate::types::Signature;
use std::sync::Arc;

/// Styles compiled into the firmware, written with a leading `&`.
pub(crate) fn signatures() -> Vec<Arc<Signature>> {
    vec![
        Arc::new(builtin("style_charging", "Charging Style")),
        Arc::new(builtin("style_pov", "POV Style")),
    ]
}
