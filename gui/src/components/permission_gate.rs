// Renders children only when the given permission set grants a capability.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::PermissionSet;

// Permissions are passed in by the caller; this component never looks them up itself.
#[component]
pub fn PermissionGate(
    permissions: PermissionSet,
    #[props(into)] capability: String,
    children: Element,
) -> Element {
    if permissions.can(&capability) {
        children
    } else {
        tracing::debug!("Hiding content guarded by '{}'", capability);
        None
    }
}
