//! Lead form wiring.

use super::target::RenderTarget;
use crate::config::Landing;

/// Point the form at its configured action and remap input names to the
/// provider's field identifiers. Phone and message inputs keep their
/// template names unless a mapping is configured.
pub(super) fn apply<T: RenderTarget>(target: &mut T, config: &Landing) {
    if let Some(action) = config.form_action.as_deref() {
        target.set_attr("leadForm", "action", action);
    }

    let Some(fields) = &config.form_fields else {
        return;
    };
    remap(target, "name", &fields.name);
    remap(target, "email", &fields.email);
    remap(target, "phone", &fields.phone);
    remap(target, "message", &fields.message);

    // Attribution inputs, in case the template lost them
    target.ensure_hidden_input("leadForm", "utmSource");
    target.ensure_hidden_input("leadForm", "referrerField");
}

fn remap<T: RenderTarget>(target: &mut T, id: &str, mapped: &Option<String>) {
    if let Some(mapped) = mapped.as_deref().filter(|m| !m.is_empty()) {
        target.set_attr(id, "name", mapped);
    }
}
