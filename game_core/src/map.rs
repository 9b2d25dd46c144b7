use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Grow (or shrink) around the same center
    pub fn inflate(&self, dx: f32, dy: f32) -> Rect {
        Rect::from_center_size(self.center(), self.size + Vec2::new(dx, dy))
    }

    /// Move the rectangle so it lies fully inside `bounds`.
    ///
    /// On an axis where the rectangle is larger than the bounds it is centred.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.pos.x = clamp_axis(self.pos.x, self.size.x, bounds.pos.x, bounds.size.x);
        self.pos.y = clamp_axis(self.pos.y, self.size.y, bounds.pos.y, bounds.size.y);
    }
}

fn clamp_axis(pos: f32, len: f32, min: f32, bound_len: f32) -> f32 {
    if len >= bound_len {
        min + (bound_len - len) * 0.5
    } else {
        pos.clamp(min, min + bound_len - len)
    }
}
