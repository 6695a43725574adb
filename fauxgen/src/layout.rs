//! Positional layouts for fixed-width identifiers.
//!
//! A layout is the shape of an identifier written down slot by slot. Each
//! slot says where its character comes from, which keeps structural rules
//! such as "the second hex digit must be even" visible in data rather than
//! buried in string-building code.

use crate::error::{FauxError, Result};
use crate::pool::CharPool;
use crate::primitives::random_choice;
use crate::rng::RandomSource;

/// Where a single slot draws its output from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// One draw from the standard pool
    Standard,
    /// One draw from the restricted pool
    Restricted,
    /// The literal separator
    Separator,
}

/// An ordered list of slots
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionalLayout {
    slots: Vec<Slot>,
}

impl PositionalLayout {
    /// Layout from an explicit slot list
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// `groups` runs of `width` standard slots joined by separator slots.
    ///
    /// `grouped(6, 2)` is the shape of a MAC address: `XX-XX-XX-XX-XX-XX`.
    pub fn grouped(groups: usize, width: usize) -> Self {
        let mut slots = Vec::with_capacity(groups * (width + 1));
        for group in 0..groups {
            if group > 0 {
                slots.push(Slot::Separator);
            }
            slots.extend(std::iter::repeat_n(Slot::Standard, width));
        }
        Self { slots }
    }

    /// Replace the slot at `index`, failing with
    /// [`FauxError::SlotOutOfBounds`] past the end of the layout
    pub fn with_slot(mut self, index: usize, slot: Slot) -> Result<Self> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(existing) => {
                *existing = slot;
                Ok(self)
            }
            None => Err(FauxError::SlotOutOfBounds { index, len }),
        }
    }

    /// The slots in order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the layout has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Indices of the separator slots
    pub fn separator_positions(&self) -> Vec<usize> {
        self.positions_of(Slot::Separator)
    }

    /// Indices of every slot of the given kind
    pub fn positions_of(&self, kind: Slot) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == kind)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Render the layout slot by slot.
    ///
    /// Slots are drawn strictly left to right, so an injected sequence maps
    /// onto output positions in order. A pool is only required to be non-empty
    /// if the layout actually has a slot drawing from it.
    pub fn render(
        &self,
        source: &mut dyn RandomSource,
        standard: &CharPool<'_>,
        restricted: &CharPool<'_>,
        separator: &str,
    ) -> Result<String> {
        let mut rendered = String::with_capacity(self.slots.len() * separator.len().max(1));
        for slot in &self.slots {
            match slot {
                Slot::Standard => rendered.push_str(random_choice(source, standard)?),
                Slot::Restricted => rendered.push_str(random_choice(source, restricted)?),
                Slot::Separator => rendered.push_str(separator),
            }
        }
        Ok(rendered)
    }
}

impl FromIterator<Slot> for PositionalLayout {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{DIGITS, HEX_UPPER};
    use crate::rng::{RngSource, SequenceSource};
    use rand::thread_rng;

    #[test]
    fn test_grouped_shape() {
        let layout = PositionalLayout::grouped(6, 2);
        assert_eq!(layout.len(), 17);
        assert_eq!(layout.separator_positions(), vec![2, 5, 8, 11, 14]);
        assert_eq!(layout.positions_of(Slot::Standard).len(), 12);

        assert!(PositionalLayout::grouped(0, 2).is_empty());
        assert!(PositionalLayout::grouped(1, 3).separator_positions().is_empty());
    }

    #[test]
    fn test_with_slot_override() {
        let layout = PositionalLayout::grouped(2, 2)
            .with_slot(1, Slot::Restricted)
            .unwrap();
        assert_eq!(
            layout.slots(),
            &[
                Slot::Standard,
                Slot::Restricted,
                Slot::Separator,
                Slot::Standard,
                Slot::Standard
            ]
        );

        let err = PositionalLayout::grouped(2, 2)
            .with_slot(5, Slot::Restricted)
            .unwrap_err();
        assert!(matches!(err, FauxError::SlotOutOfBounds { index: 5, len: 5 }));

        let err = PositionalLayout::default()
            .with_slot(0, Slot::Separator)
            .unwrap_err();
        assert!(matches!(err, FauxError::SlotOutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn test_render_with_fixed_sequence() {
        let layout = PositionalLayout::grouped(3, 2)
            .with_slot(1, Slot::Restricted)
            .unwrap();
        let standard = CharPool::from_alphabet(HEX_UPPER);
        let restricted = CharPool::from_tokens(&["0", "2", "4", "6", "8", "A", "C", "E"]);

        // Offsets are consumed by drawing slots only; separators draw nothing.
        let mut source = SequenceSource::new(vec![15, 5, 10, 11, 0, 1]);
        let rendered = layout
            .render(&mut source, &standard, &restricted, ":")
            .unwrap();
        assert_eq!(rendered, "FA:AB:01");
        assert_eq!(source.draws(), 6);
    }

    #[test]
    fn test_render_preserves_order_and_separator() {
        let layout: PositionalLayout = [Slot::Separator, Slot::Standard, Slot::Separator]
            .into_iter()
            .collect();
        let digits = CharPool::from_alphabet(DIGITS);
        let mut source = SequenceSource::new(vec![3]);
        let rendered = layout
            .render(&mut source, &digits, &CharPool::default(), "--")
            .unwrap();
        assert_eq!(rendered, "--3--");
    }

    #[test]
    fn test_render_requires_pools_only_when_used() {
        let layout = PositionalLayout::new(vec![Slot::Standard, Slot::Restricted]);
        let digits = CharPool::from_alphabet(DIGITS);
        let mut source = RngSource::new(thread_rng());

        let err = layout
            .render(&mut source, &digits, &CharPool::default(), "")
            .unwrap_err();
        assert!(matches!(err, FauxError::EmptyPool { .. }));
    }

    #[test]
    fn test_render_random_respects_pools() {
        let layout = PositionalLayout::grouped(6, 2)
            .with_slot(1, Slot::Restricted)
            .unwrap();
        let standard = CharPool::from_alphabet(HEX_UPPER);
        let restricted = CharPool::from_alphabet("02468ACE");
        let mut source = RngSource::new(thread_rng());

        for _ in 0..50 {
            let rendered = layout
                .render(&mut source, &standard, &restricted, "-")
                .unwrap();
            assert_eq!(rendered.len(), 17);
            let second = rendered.chars().nth(1).unwrap();
            assert!("02468ACE".contains(second));
        }
    }
}
