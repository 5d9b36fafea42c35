//! Control-color codec.
//!
//! The invisible control canvas identifies regions by color instead of
//! geometry: every drawn shape/handle is filled with a color whose 24-bit
//! index encodes a `(label_id, handle_id)` pair. This packing is a pinned
//! wire contract: whatever draws the control buffer and whatever decodes a
//! picked pixel must agree bit-for-bit, or picking silently returns wrong
//! identities.
//!
//! Packing: `index = r + g·256 + b·65536` (channels little-endian), with
//! `handle_id = index & 0xFF` and `label_id = (index >> 8) − 1`. The −1 bias
//! makes raw index 0 (pure black, the cleared background) decode to the
//! "no label" sentinel.

/// Label id decoded from a cleared (black) control pixel.
pub const BACKGROUND_LABEL: i32 = -1;

/// Highest label id the 24-bit index can represent (`label_id + 1` must fit
/// in the 16 bits above the handle byte).
pub const MAX_LABEL_ID: i32 = 0xFFFF - 1;

/// A decoded control-buffer identity: which label and which of its handles
/// (e.g. a polygon vertex ordinal) sits under a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickId {
    /// Label id, `>= -1`; `-1` means background.
    pub label_id: i32,
    /// Per-label handle ordinal. Meaningless when `label_id == -1`.
    pub handle_id: u8,
}

impl PickId {
    /// The "nothing under the cursor" sentinel.
    pub const BACKGROUND: PickId = PickId {
        label_id: BACKGROUND_LABEL,
        handle_id: 0,
    };

    pub fn new(label_id: i32, handle_id: u8) -> Self {
        Self { label_id, handle_id }
    }

    /// True if this pick hit the cleared background.
    pub fn is_background(&self) -> bool {
        self.label_id == BACKGROUND_LABEL
    }
}

/// Encode a `(label_id, handle_id)` pair as a 24-bit control color index.
///
/// The label slot is clamped into the representable range rather than
/// panicking: more than 65535 labels exhausts the id space, and the worst
/// outcome of the clamp is a misidentified pick, not a crash.
pub fn encode(label_id: i32, handle_id: u8) -> u32 {
    // Widened so the +1 bias cannot overflow at i32::MAX.
    let slot = i64::from(label_id) + 1;
    let slot = if !(0..=0xFFFF).contains(&slot) {
        log::warn!("control codec label id {label_id} out of range, clamping");
        slot.clamp(0, 0xFFFF)
    } else {
        slot
    };
    (slot as u32) << 8 | handle_id as u32
}

/// Decode a 24-bit control color index back to `(label_id, handle_id)`.
///
/// Total function: any index in `[0, 2^24)` decodes to a valid pair, with 0
/// (the cleared background) decoding to [`PickId::BACKGROUND`].
pub fn decode(index: u32) -> PickId {
    PickId {
        label_id: (index >> 8) as i32 - 1,
        handle_id: (index & 0xFF) as u8,
    }
}

/// Split a 24-bit index into little-endian `(r, g, b)` channels for drawing
/// into the control buffer.
pub fn channels(index: u32) -> (u8, u8, u8) {
    (
        (index & 0xFF) as u8,
        ((index >> 8) & 0xFF) as u8,
        ((index >> 16) & 0xFF) as u8,
    )
}

/// Rebuild a 24-bit index from little-endian `(r, g, b)` channels, as read
/// back from a sampled control pixel.
pub fn from_channels(r: u8, g: u8, b: u8) -> u32 {
    r as u32 + g as u32 * 256 + b as u32 * 65536
}
