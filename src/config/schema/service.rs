//! Service card entries.

use serde::{Deserialize, Serialize};

/// One card in the services grid. Cards render in array order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Icon image path or URL.
    pub icon: String,
    pub title: String,
    pub description: String,
}
