/// Index of the viewport-height section a scroll offset falls in.
///
/// Uses `ceil`, so any scroll past a boundary already counts as the next
/// section: half a viewport down is section 1. Negative offsets (overscroll)
/// and degenerate viewports map to section 0.
#[inline]
pub fn section_for_scroll(scroll_y: f32, viewport_height: f32) -> usize {
    let ratio = scroll_y / viewport_height;
    if viewport_height <= 0.0 || ratio.is_nan() || ratio <= 0.0 {
        return 0;
    }
    ratio.ceil() as usize
}

/// Remembers the active section and reports boundary crossings.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    current: usize,
}

impl SectionTracker {
    pub fn new(initial: usize) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Record a scroll offset. Returns the new section when a boundary was
    /// crossed and `None` while scrolling within the same section.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> Option<usize> {
        let section = section_for_scroll(scroll_y, viewport_height);
        if section == self.current {
            return None;
        }
        self.current = section;
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs_are_section_zero() {
        assert_eq!(section_for_scroll(-40.0, 800.0), 0);
        assert_eq!(section_for_scroll(400.0, 0.0), 0);
        assert_eq!(section_for_scroll(f32::NAN, 800.0), 0);
    }

    #[test]
    fn tracker_reports_each_crossing_once() {
        let mut t = SectionTracker::default();
        assert_eq!(t.update(10.0, 800.0), Some(1));
        assert_eq!(t.update(300.0, 800.0), None);
        assert_eq!(t.update(800.0, 800.0), None);
        assert_eq!(t.update(801.0, 800.0), Some(2));
        assert_eq!(t.update(0.0, 800.0), Some(0));
        assert_eq!(t.current(), 0);
    }
}
