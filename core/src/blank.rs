use std::fmt;

/// The canonical "no meaningful value" marker.
///
/// Used as the success value of operations that only run for effect, such as
/// [`ok_blank`](crate::result::ok_blank) or [`run_throwing`](crate::attempt::run_throwing).
/// All instances are equal and hash identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blank;

pub const BLANK: Blank = Blank;

impl fmt::Display for Blank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("blank")
    }
}

impl From<()> for Blank {
    fn from(_: ()) -> Self {
        BLANK
    }
}

impl From<Blank> for () {
    fn from(_: Blank) -> Self {}
}
