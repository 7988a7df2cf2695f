use heapless::Vec;

use crate::color::Hsl;

/// Fixed-point scale used for per-step deltas
const STEP_SCALE: i32 = 100;
const HUE_CIRCLE: i32 = 360;

/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueDirection {
    Clockwise,
    CounterClockwise,
    Shortest,
}

/// Sequence of HSL colors stepping between two endpoints
///
/// Per-step deltas are fixed when the gradient is built. Every element is
/// derived from its index, so the sequence carries no iteration state and
/// can be walked any number of times with identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueGradient {
    start: Hsl,
    end: Hsl,
    steps: usize,
    hue_step: i32,
    sat_step: i32,
    lum_step: i32,
}

/// Build a gradient of `steps` colors from `start` to `end`
///
/// `steps <= 0` is treated as a single step.
#[allow(clippy::cast_sign_loss)]
pub fn interpolate(start: Hsl, end: Hsl, steps: i32, direction: HueDirection) -> HueGradient {
    let steps = steps.max(1);

    let clockwise_distance = (end.hue() + HUE_CIRCLE - start.hue()) % HUE_CIRCLE;
    let counter_distance = (start.hue() + HUE_CIRCLE - end.hue()) % HUE_CIRCLE;

    // Determine actual direction based on hue distances
    let actual_direction = match direction {
        HueDirection::Shortest => {
            if clockwise_distance <= counter_distance {
                HueDirection::Clockwise
            } else {
                HueDirection::CounterClockwise
            }
        }
        other => other,
    };

    let hue_step = if actual_direction == HueDirection::Clockwise {
        clockwise_distance * STEP_SCALE / steps
    } else {
        -(counter_distance * STEP_SCALE) / steps
    };
    let sat_step = (end.saturation() - start.saturation()) * STEP_SCALE / steps;
    let lum_step = (end.luminosity() - start.luminosity()) * STEP_SCALE / steps;

    HueGradient {
        start,
        end,
        steps: steps as usize,
        hue_step,
        sat_step,
        lum_step,
    }
}

impl HueGradient {
    /// Number of colors in the gradient (always at least one)
    pub const fn len(&self) -> usize {
        self.steps
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`
    ///
    /// With more than one step the endpoints are returned exactly as given.
    pub fn get(&self, index: usize) -> Option<Hsl> {
        if index >= self.steps {
            return None;
        }
        if self.steps == 1 {
            return Some(self.step(1));
        }
        if index == 0 {
            return Some(self.start);
        }
        if index == self.steps - 1 {
            return Some(self.end);
        }
        Some(self.step(index))
    }

    /// Iterate over the gradient colors
    pub fn iter(&self) -> HueGradientIter<'_> {
        HueGradientIter {
            gradient: self,
            index: 0,
        }
    }

    /// Collect the gradient into a fixed-capacity vector
    ///
    /// Returns `None` if the gradient does not fit into `N` elements.
    pub fn to_vec<const N: usize>(&self) -> Option<Vec<Hsl, N>> {
        if self.steps > N {
            return None;
        }
        let mut colors = Vec::new();
        for color in self {
            colors.push(color).ok()?;
        }
        Some(colors)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn step(&self, index: usize) -> Hsl {
        let i = index as i32;
        // Re-adding a full turn keeps the hue non-negative before normalization
        let h = (self.start.hue() * STEP_SCALE + i * self.hue_step) / STEP_SCALE + HUE_CIRCLE;
        let s = (self.start.saturation() * STEP_SCALE + i * self.sat_step) / STEP_SCALE;
        let l = (self.start.luminosity() * STEP_SCALE + i * self.lum_step) / STEP_SCALE;
        Hsl::new(h, s, l)
    }
}

/// Iterator over [`HueGradient`] colors
#[derive(Debug, Clone)]
pub struct HueGradientIter<'a> {
    gradient: &'a HueGradient,
    index: usize,
}

impl Iterator for HueGradientIter<'_> {
    type Item = Hsl;

    fn next(&mut self) -> Option<Self::Item> {
        let color = self.gradient.get(self.index)?;
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.gradient.steps.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HueGradientIter<'_> {}

impl<'a> IntoIterator for &'a HueGradient {
    type Item = Hsl;
    type IntoIter = HueGradientIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
