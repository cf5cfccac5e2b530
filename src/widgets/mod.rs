//! Page widgets with server-side state: theme, navigation, attribution.

pub mod nav;
pub mod theme;
pub mod utm;
