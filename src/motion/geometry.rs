use std::fmt;
use std::str::FromStr;

use super::error::MotionError;

/// Axis-aligned box in CSS pixels, `y` growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grows the box by positive margins and shrinks it by negative ones.
    pub fn outset(&self, margin: &RootMargin) -> Self {
        let x = self.x - margin.left;
        let y = self.y - margin.top;
        Self::new(
            x,
            y,
            (self.right() + margin.right - x).max(0.0),
            (self.bottom() + margin.bottom - y).max(0.0),
        )
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Offsets applied to the viewport before intersecting, in the order CSS
/// uses (`top right bottom left`). Negative values shrink the trigger zone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    pub fn bottom(bottom: f64) -> Self {
        Self { bottom, ..Self::ZERO }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|part| {
                let number = part.strip_suffix("px").unwrap_or(part);
                if number != "0" && number.len() == part.len() {
                    return Err(MotionError::InvalidRootMargin(s.to_string()));
                }
                number
                    .parse::<f64>()
                    .map_err(|_| MotionError::InvalidRootMargin(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [top, right, bottom, left] = match values[..] {
            [all] => [all; 4],
            [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
            [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
            [top, right, bottom, left] => [top, right, bottom, left],
            _ => return Err(MotionError::InvalidRootMargin(s.to_string())),
        };
        Ok(Self { top, right, bottom, left })
    }
}

/// Fraction of `element` visible inside `viewport` after applying `margin`.
///
/// Zero-area elements count as fully visible while they sit inside the
/// trigger zone.
pub fn intersection_ratio(element: &Rect, viewport: &Rect, margin: &RootMargin) -> f64 {
    let root = viewport.outset(margin);
    match element.intersection(&root) {
        None => 0.0,
        Some(_) if element.area() == 0.0 => 1.0,
        Some(visible) => (visible.area() / element.area()).min(1.0),
    }
}

/// Whether a ratio counts as "intersecting" for the given threshold.
pub fn crosses(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Reading of an observer entry. `is_intersecting` alone is true for edge
/// touches and for the initial entry of a barely visible element, so the
/// ratio has to clear the threshold as well.
pub fn entry_crosses(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && crosses(ratio, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_shorthand() {
        let margin: RootMargin = "0px 0px -100px 0px".parse().unwrap();
        assert_eq!(margin, RootMargin::bottom(-100.0));

        let margin: RootMargin = "10px 20px".parse().unwrap();
        assert_eq!(margin.top, 10.0);
        assert_eq!(margin.bottom, 10.0);
        assert_eq!(margin.left, 20.0);

        let margin: RootMargin = "0".parse().unwrap();
        assert_eq!(margin, RootMargin::ZERO);
    }

    #[test]
    fn rejects_percentages_and_garbage() {
        assert!("10% 0px".parse::<RootMargin>().is_err());
        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!("abc".parse::<RootMargin>().is_err());
    }

    #[test]
    fn displays_as_css() {
        assert_eq!(RootMargin::bottom(-80.0).to_string(), "0px 0px -80px 0px");
    }

    #[test]
    fn negative_bottom_margin_delays_the_crossing() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        // top edge 50px above the fold: 50 of 200px visible
        let element = Rect::new(0.0, 750.0, 1000.0, 200.0);

        let plain = intersection_ratio(&element, &viewport, &RootMargin::ZERO);
        assert!((plain - 0.25).abs() < 1e-9);
        assert!(crosses(plain, 0.1));

        let shrunk = intersection_ratio(&element, &viewport, &RootMargin::bottom(-100.0));
        assert_eq!(shrunk, 0.0);
        assert!(!crosses(shrunk, 0.1));
    }

    #[test]
    fn zero_area_element_inside_is_fully_visible() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let point = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&point, &viewport, &RootMargin::ZERO), 1.0);
    }

    #[test]
    fn touching_edges_do_not_cross() {
        assert!(!crosses(0.0, 0.0));
        assert!(crosses(0.05, 0.0));
        assert!(!crosses(0.05, 0.1));
    }

    #[test]
    fn entry_below_threshold_is_not_visible() {
        // initial entry of a tall section peeking in at the bottom
        assert!(!entry_crosses(true, 0.005, 0.1));
        // counter only 20% on screen
        assert!(!entry_crosses(true, 0.2, 0.5));
        assert!(entry_crosses(true, 0.5, 0.5));
        assert!(!entry_crosses(false, 0.6, 0.5));
        assert!(!entry_crosses(true, 0.0, 0.0));
    }
}
