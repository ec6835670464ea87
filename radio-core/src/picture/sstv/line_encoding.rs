//! Per-scanline pixel encoding scheme.

/// How one transmission line maps to image rows and colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEncoding {
    /// `Y0, R-Y, B-Y, Y1`: luma of row N, the average of Cr across rows N
    /// and N+1, the average of Cb across rows N and N+1, then luma of row
    /// N+1. Used by the entire PD family.
    YccAverageCrCb,
}
