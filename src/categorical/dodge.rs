//! Hue dodge layout.
//!
//! Splits each category's band into one slot per hue level so hue
//! sub-groups sit side by side instead of on top of each other.

/// How slots are sized when a hue level is absent from a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum DodgeEmpty {
    /// Every level keeps its slot; absent levels leave a hole.
    #[default]
    Keep,
    /// Absent levels are removed and the present ones re-centered at their usual width.
    Drop,
    /// Present levels share the whole band.
    Fill,
}

/// Offsets and widths for hue sub-groups within one category band.
#[derive(Debug, Clone, PartialEq)]
pub struct DodgeLayout {
    offsets: Vec<f32>,
    element_width: f32,
    width: f32,
    gap: f32,
    dodged: bool,
    empty: DodgeEmpty,
    /// Present hue levels per category, ascending; only filled by [`DodgeLayout::fit`].
    occupied: Vec<Vec<usize>>,
}

impl DodgeLayout {
    /// Compute the layout.
    ///
    /// `width` is the fraction of the category band used by the whole group
    /// (0.8 by default); `gap` shrinks each element by that fraction of its
    /// slot. With `dodge` false every hue level sits on the category center and
    /// keeps the full width.
    #[must_use]
    pub fn new(n_hue: usize, width: f32, gap: f32, dodge: bool) -> Self {
        let n = n_hue.max(1);
        let dodged = dodge && n > 1;
        let (offsets, element_width) = if dodged {
            let slot = width / n as f32;
            (centered(n, slot), slot * (1.0 - gap))
        } else {
            (vec![0.0; n], width * (1.0 - gap))
        };
        Self {
            offsets,
            element_width,
            width,
            gap,
            dodged,
            empty: DodgeEmpty::Keep,
            occupied: Vec::new(),
        }
    }

    /// Slot sizing for absent hue levels.
    #[must_use]
    pub fn empty(mut self, empty: DodgeEmpty) -> Self {
        self.empty = empty;
        self
    }

    /// Layout for one panel given its occupied `(category, hue)` slots.
    ///
    /// Only changes anything when dodging with [`DodgeEmpty::Drop`] or
    /// [`DodgeEmpty::Fill`].
    #[must_use]
    pub fn fit(&self, slots: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut fitted = self.clone();
        fitted.occupied.clear();
        if !self.dodged || self.empty == DodgeEmpty::Keep {
            return fitted;
        }
        for (category, hue) in slots {
            if fitted.occupied.len() <= category {
                fitted.occupied.resize(category + 1, Vec::new());
            }
            let levels = &mut fitted.occupied[category];
            if let Err(i) = levels.binary_search(&hue) {
                levels.insert(i, hue);
            }
        }
        fitted
    }

    /// Whether hue levels are offset from the category center.
    #[must_use]
    pub fn is_dodged(&self) -> bool {
        self.dodged
    }

    /// Offset from the category position for hue level `hue` with every level present.
    #[must_use]
    pub fn offset(&self, hue: usize) -> f32 {
        self.offsets.get(hue).copied().unwrap_or(0.0)
    }

    /// All offsets with every level present, in hue order.
    #[must_use]
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    /// Width of one drawn element (box, bar, violin) with every level present.
    #[must_use]
    pub fn element_width(&self) -> f32 {
        self.element_width
    }

    /// Rank and count of `hue` among the levels present in `category`, when
    /// the empty policy re-packs that category.
    fn packed(&self, category: usize, hue: usize) -> Option<(usize, usize)> {
        let levels = self.occupied.get(category)?;
        let rank = levels.binary_search(&hue).ok()?;
        Some((rank, levels.len()))
    }

    /// Slot width in category units for a (category, hue) element.
    fn slot(&self, category: usize, hue: usize) -> f32 {
        if !self.dodged {
            return self.width;
        }
        let n = self.offsets.len() as f32;
        match (self.empty, self.packed(category, hue)) {
            (DodgeEmpty::Fill, Some((_, k))) => self.width / k as f32,
            _ => self.width / n,
        }
    }

    /// Share of the full group width given to a (category, hue) element.
    #[must_use]
    pub fn slot_fraction(&self, category: usize, hue: usize) -> f32 {
        if self.width > 0.0 {
            self.slot(category, hue) / self.width
        } else {
            1.0
        }
    }

    /// Width of the drawn element at a (category, hue) slot.
    #[must_use]
    pub fn element_width_at(&self, category: usize, hue: usize) -> f32 {
        self.slot(category, hue) * (1.0 - self.gap)
    }

    /// Absolute position of a (category, hue) element.
    #[must_use]
    pub fn position(&self, category: usize, hue: usize) -> f32 {
        let offset = match self.packed(category, hue) {
            Some((rank, k)) if self.dodged => {
                let slot = self.slot(category, hue);
                -(k as f32) * slot / 2.0 + slot / 2.0 + slot * rank as f32
            }
            _ => self.offset(hue),
        };
        category as f32 + offset
    }
}

/// Offsets of `n` slots of width `slot` centered on zero.
fn centered(n: usize, slot: f32) -> Vec<f32> {
    let total = slot * n as f32;
    (0..n).map(|i| -total / 2.0 + slot / 2.0 + slot * i as f32).collect()
}
