//! Link classifier - decides which links are checked against the filesystem

/// URL schemes that point outside the project
const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "mailto:"];

/// How a link target is treated by the audit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `http://`, `https://` or `mailto:` - never checked
    External,
    /// `#section` in the same document - never checked
    AnchorOnly,
    /// Everything else - resolved and checked for existence
    Internal,
}

impl LinkKind {
    /// Whether links of this kind are resolved and counted
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Check if a link is external (http/https/mailto)
#[must_use]
pub fn is_external(link: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|prefix| link.starts_with(prefix))
}

/// Check if a link only references an anchor (`#section`)
#[must_use]
pub fn is_anchor_only(link: &str) -> bool {
    link.starts_with('#')
}

/// Classify a link target
#[must_use]
pub fn classify(link: &str) -> LinkKind {
    if is_external(link) {
        LinkKind::External
    } else if is_anchor_only(link) {
        LinkKind::AnchorOnly
    } else {
        LinkKind::Internal
    }
}
