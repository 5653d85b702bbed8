/// A cell coordinate. Signed so regions can be shifted partly off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Rectangle anchored within the terminal grid. `max` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Area {
    pub min: Point,
    pub max: Point,
}

impl Area {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Shorthand for `Area::new(Point::new(x0, y0), Point::new(x1, y1))`.
    pub const fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Area of the given size anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::rect(0, 0, size.width, size.height)
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.min.offset(dx, dy), self.max.offset(dx, dy))
    }

    /// Inset by `n` cells on every side, clamping the extent at zero.
    pub fn shrink(&self, n: i32) -> Self {
        let width = (self.width() - 2 * n).max(0);
        let height = (self.height() - 2 * n).max(0);
        let min = self.min.offset(n, n);
        Self::new(min, min.offset(width, height))
    }

    /// Largest area anchored at `min` whose width:height follows `ratio`.
    /// A ratio with a zero component leaves the area unchanged.
    pub fn with_ratio(&self, ratio: Size) -> Self {
        if ratio.width <= 0 || ratio.height <= 0 || self.is_empty() {
            return *self;
        }
        let (w, h) = (self.width() as i64, self.height() as i64);
        let (rx, ry) = (ratio.width as i64, ratio.height as i64);
        let (new_w, new_h) = if w * ry >= h * rx {
            (h * rx / ry, h)
        } else {
            (w, w * ry / rx)
        };
        Self::new(self.min, self.min.offset(new_w as i32, new_h as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_area_is_valid() {
        let area = Area::rect(3, 3, 3, 5);
        assert_eq!(area.width(), 0);
        assert_eq!(area.height(), 2);
        assert!(area.is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let area = Area::rect(0, 0, 2, 2);
        assert!(area.contains(Point::new(1, 1)));
        assert!(!area.contains(Point::new(2, 1)));
        assert!(!area.contains(Point::new(-1, 0)));
    }

    #[test]
    fn shrink_never_goes_negative() {
        assert_eq!(Area::rect(0, 0, 5, 4).shrink(1), Area::rect(1, 1, 4, 3));
        let collapsed = Area::rect(0, 0, 2, 1).shrink(1);
        assert_eq!(collapsed.width(), 0);
        assert_eq!(collapsed.height(), 0);
    }

    #[test]
    fn ratio_limits_the_longer_side() {
        let area = Area::rect(0, 0, 10, 4);
        assert_eq!(area.with_ratio(Size::new(1, 1)), Area::rect(0, 0, 4, 4));
        let tall = Area::rect(2, 2, 6, 20);
        assert_eq!(tall.with_ratio(Size::new(2, 1)), Area::rect(2, 2, 6, 4));
        assert_eq!(area.with_ratio(Size::new(0, 3)), area);
    }
}
