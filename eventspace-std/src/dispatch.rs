//! Binding selection for a fired event.
//!
//! Selection runs while the registry is locked and returns owned callbacks,
//! so invoking them afterwards can freely re-enter the registry.

use crate::elements::Binding;
use eventspace_core::{Callback, DispatchPolicy, Message};

/// Callbacks to invoke for one fire, in registration order.
pub fn select<T, E: Message>(
    policy: DispatchPolicy,
    bindings: &[Binding<T, E>],
    is_active: impl Fn(&str) -> bool,
) -> Vec<Callback<T, E>> {
    let mut selected = Vec::new();
    for binding in bindings {
        if !policy.selects(is_active(&binding.space)) {
            continue;
        }
        selected.push(binding.callback.clone());
        if policy.stops_after_first() {
            break;
        }
    }
    selected
}
