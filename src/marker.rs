/// Marker vocabulary shared by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Triple-backtick fence toggling a preformatted region
    Fence,
    Bold,
    Italic,
    Code,
}

/// Emphasis markers in rewrite-precedence order.
///
/// The order is fixed: it is the tie-break policy when marker literals could
/// overlap. The fence is checked before this table is consulted at all, so
/// ``` never reaches the single-backtick entry.
pub const EMPHASIS_MARKERS: [Marker; 3] = [Marker::Bold, Marker::Italic, Marker::Code];

impl Marker {
    /// The literal substring looked for in source tokens
    pub fn literal(self) -> &'static str {
        match self {
            Marker::Fence => "```",
            Marker::Bold => "**",
            Marker::Italic => "_",
            Marker::Code => "`",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Marker::Fence => "<pre>",
            Marker::Bold => "<b>",
            Marker::Italic => "<i>",
            Marker::Code => "<tt>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Marker::Fence => "</pre>",
            Marker::Bold => "</b>",
            Marker::Italic => "</i>",
            Marker::Code => "</tt>",
        }
    }
}
