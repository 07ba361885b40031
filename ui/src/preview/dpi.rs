//! The export resolution multiplier and its lenient text input.

// Verify how this lines up with 150dpi, 300dpi, 600dpi, etc.
pub const DEFAULT_IMAGE_DPI: u8 = 2;
pub const MAX_IMAGE_DPI: u8 = 10;

/// An integer resolution multiplier, always within
/// `DEFAULT_IMAGE_DPI..=MAX_IMAGE_DPI`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DpiScale(u8);

impl DpiScale {
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(DEFAULT_IMAGE_DPI.into(), MAX_IMAGE_DPI.into());
        Self(clamped as u8)
    }

    /// Parses user-typed text. Only the leading integer counts ("4x" is 4);
    /// text without one falls back to the default rather than failing.
    pub fn parse_lenient(raw: &str) -> Self {
        leading_integer(raw).map(Self::new).unwrap_or_default()
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for DpiScale {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_DPI)
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // Anything too long for an i64 is far above the maximum anyway.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// The DPI text box: the raw text is shown back verbatim while the effective
/// scale is always valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpiInput {
    raw: String,
    scale: DpiScale,
}

impl Default for DpiInput {
    fn default() -> Self {
        Self {
            raw: DEFAULT_IMAGE_DPI.to_string(),
            scale: DpiScale::default(),
        }
    }
}

impl DpiInput {
    /// Stores new text. Returns `true` only when the effective scale moved,
    /// which is the only case worth re-rendering for.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> bool {
        self.raw = raw.into();
        let scale = DpiScale::parse_lenient(&self.raw);
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn scale(&self) -> DpiScale {
        self.scale
    }
}
