pub(crate) const GREEN_CHECK: &str = "\u{2714}";
pub(crate) const RED_X: &str = "\u{2718}";
