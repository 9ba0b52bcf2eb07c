use crate::colors::Color;
use heapless::Vec;

/// Number of color slots in a [`ColorSequence`].
pub const MAX_SEQUENCE_COLORS: usize = 6;

/// A fixed set of colors for [`Mode::Alternate`](crate::Mode::Alternate).
///
/// Holds [`MAX_SEQUENCE_COLORS`] slots. Slot 0 is always part of the cycle;
/// the cycle then extends over every following slot up to, but not
/// including, the first [`Color::NONE`]. Unused slots hold `NONE`.
///
/// With a single real color the cycle has length one and alternation
/// degenerates into a steady display of that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSequence {
    colors: [Color; MAX_SEQUENCE_COLORS],
}

impl ColorSequence {
    /// Creates a sequence with every slot set to [`Color::NONE`].
    pub const fn new() -> Self {
        Self {
            colors: [Color::NONE; MAX_SEQUENCE_COLORS],
        }
    }

    /// Creates a sequence holding one color.
    pub const fn single(color: Color) -> Self {
        let mut colors = [Color::NONE; MAX_SEQUENCE_COLORS];
        colors[0] = color;
        Self { colors }
    }

    /// Creates a sequence from the first [`MAX_SEQUENCE_COLORS`] entries of
    /// `colors`. Extra entries are ignored, missing ones are `NONE`.
    pub fn from_slice(colors: &[Color]) -> Self {
        let mut sequence = Self::new();
        for (slot, color) in sequence.colors.iter_mut().zip(colors) {
            *slot = *color;
        }
        sequence
    }

    /// Returns the color in `index`, or `NONE` past the last slot.
    #[inline]
    pub fn get(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(Color::NONE)
    }

    /// Returns the color in slot 0.
    #[inline]
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    /// Number of slots the alternation walks through, between 1 and
    /// [`MAX_SEQUENCE_COLORS`].
    pub fn cycle_len(&self) -> usize {
        1 + self.colors[1..]
            .iter()
            .take_while(|color| !color.is_none())
            .count()
    }

    /// Returns the position that follows `index` in the cycle, wrapping to 0
    /// at the end of the cycle.
    #[inline]
    pub fn advance(&self, index: usize) -> usize {
        if index < self.cycle_len() - 1 {
            index + 1
        } else {
            0
        }
    }

    /// Returns `index` if it still lies inside the cycle, otherwise 0.
    #[inline]
    pub fn clamp_index(&self, index: usize) -> usize {
        if index < self.cycle_len() { index } else { 0 }
    }

    /// Colors of the cycle, in order.
    pub fn active(&self) -> Vec<Color, MAX_SEQUENCE_COLORS> {
        // cycle_len never exceeds the capacity
        Vec::from_slice(&self.colors[..self.cycle_len()]).unwrap_or_default()
    }

    /// All slots, including unused `NONE` entries.
    #[inline]
    pub fn as_array(&self) -> &[Color; MAX_SEQUENCE_COLORS] {
        &self.colors
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[Color]> for ColorSequence {
    fn from(colors: &[Color]) -> Self {
        Self::from_slice(colors)
    }
}

impl<const N: usize> From<[Color; N]> for ColorSequence {
    fn from(colors: [Color; N]) -> Self {
        Self::from_slice(&colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::RED;
    const B: Color = Color::GREEN;
    const C: Color = Color::BLUE;

    #[test]
    fn cycle_stops_before_first_none() {
        let sequence = ColorSequence::from_slice(&[A, B, C]);
        assert_eq!(sequence.cycle_len(), 3);
        assert_eq!(sequence.advance(0), 1);
        assert_eq!(sequence.advance(1), 2);
        assert_eq!(sequence.advance(2), 0);
    }

    #[test]
    fn full_sequence_wraps_after_last_slot() {
        let sequence = ColorSequence::from_slice(&[A, B, C, A, B, C]);
        assert_eq!(sequence.cycle_len(), MAX_SEQUENCE_COLORS);
        assert_eq!(sequence.advance(4), 5);
        assert_eq!(sequence.advance(5), 0);
    }

    #[test]
    fn single_color_never_advances() {
        let sequence = ColorSequence::single(A);
        assert_eq!(sequence.cycle_len(), 1);
        assert_eq!(sequence.advance(0), 0);
    }

    #[test]
    fn gap_ends_cycle_even_with_later_colors() {
        let sequence = ColorSequence::from_slice(&[A, B, Color::NONE, C]);
        assert_eq!(sequence.cycle_len(), 2);
        assert_eq!(sequence.advance(1), 0);
        assert_eq!(sequence.active().as_slice(), &[A, B]);
    }

    #[test]
    fn extra_colors_are_dropped() {
        let sequence = ColorSequence::from_slice(&[A, B, C, A, B, C, A, B]);
        assert_eq!(sequence.as_array(), &[A, B, C, A, B, C]);
        assert_eq!(sequence.get(6), Color::NONE);
    }

    #[test]
    fn clamp_resets_index_outside_cycle() {
        let sequence = ColorSequence::from_slice(&[A, B]);
        assert_eq!(sequence.clamp_index(1), 1);
        assert_eq!(sequence.clamp_index(4), 0);
        assert_eq!(ColorSequence::new().clamp_index(0), 0);
    }

    #[test]
    fn advance_from_out_of_range_index_wraps() {
        let sequence = ColorSequence::from_slice(&[A, B]);
        assert_eq!(sequence.advance(7), 0);
        assert_eq!(sequence.advance(usize::MAX), 0);
    }
}
