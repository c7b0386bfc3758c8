//! Display track geometry: clone padding around the original items

/// Layout of the rendered track: `clones` mirrored slots on each side of the
/// `len` originals. Slot `p` shows original `(p - clones) mod len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTrack {
    len: usize,
    clones: usize,
}

impl DisplayTrack {
    /// `len` must be non-zero; callers validate through `ItemSequence`.
    pub(crate) fn new(len: usize, clones: usize) -> Self {
        debug_assert!(len > 0, "display track needs at least one original");
        Self { len, clones }
    }

    /// Number of originals (N).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clones on each side (K).
    pub fn clone_count(&self) -> usize {
        self.clones
    }

    /// Total rendered slots: N + 2K.
    pub fn slot_count(&self) -> usize {
        self.len + 2 * self.clones
    }

    /// First slot holding an original.
    pub fn first_original_slot(&self) -> usize {
        self.clones
    }

    /// Steady-state slots are exactly the originals: [K, N + K).
    pub fn is_steady(&self, slot: usize) -> bool {
        (self.clones..self.clones + self.len).contains(&slot)
    }

    /// Slot holding original `index`.
    pub fn slot_of(&self, index: usize) -> usize {
        self.clones + index
    }

    /// Original shown at `slot`, or None past the end of the track.
    pub fn original_at(&self, slot: usize) -> Option<usize> {
        if slot >= self.slot_count() {
            return None;
        }
        let shifted = slot as isize - self.clones as isize;
        Some(shifted.rem_euclid(self.len as isize) as usize)
    }

    pub fn is_clone(&self, slot: usize) -> bool {
        slot < self.slot_count() && !self.is_steady(slot)
    }

    /// Steady-state slot showing the same original as a clone slot.
    /// Returns None when `slot` is already steady or off the track.
    ///
    /// For the one-step overshoots the controller produces this is `K` when
    /// wrapping forward and `slot + N` when wrapping backward.
    pub fn rebase(&self, slot: usize) -> Option<usize> {
        if self.is_steady(slot) {
            return None;
        }
        self.original_at(slot).map(|index| self.slot_of(index))
    }

    /// Original index for every slot, left to right.
    pub fn layout(&self) -> Vec<usize> {
        (0..self.slot_count())
            .filter_map(|slot| self.original_at(slot))
            .collect()
    }
}

/// Geometry derived once from the viewport at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Distance between consecutive item origins (width + gap).
    pub pitch: f32,
    /// Items that fit entirely in the viewport.
    pub visible_count: usize,
    /// Clones on each side of the originals.
    pub clone_count: usize,
}

impl TrackGeometry {
    /// VisibleCount = floor(W / pitch); K = VisibleCount + 1.
    ///
    /// Returns None when the ratio is not finite or more than `max_visible`
    /// whole items would fit.
    pub fn measure(viewport_width: f32, pitch: f32, max_visible: usize) -> Option<Self> {
        let ratio = (viewport_width / pitch).floor().max(0.0);
        if !ratio.is_finite() || ratio > max_visible as f32 {
            return None;
        }
        let visible_count = ratio as usize;
        Some(Self {
            pitch,
            visible_count,
            clone_count: visible_count.checked_add(1)?,
        })
    }

    pub fn offset_of(&self, slot: usize) -> f32 {
        slot as f32 * self.pitch
    }
}
