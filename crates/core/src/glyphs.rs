//! Glyph catalogs.
//!
//! Every multi-row shape is a tagged variant with an explicit `cycle` rule;
//! animated sequences are indexed through [`frame_at`].

/// Index into an animation sequence of `len` frames from a fractional counter.
pub fn frame_at(counter: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (counter.floor().max(0.0) as usize) % len
}

pub const BIRD_FRAMES: [&str; 3] = ["~v~", "~^~", "~-~"];
pub const BUTTERFLY_FRAMES: [&str; 4] = ["}{", ")(", "||", ")("];
/// Twinkle sequence; the two blanks make stars blink out.
pub const STAR_TWINKLE: [char; 6] = ['.', '+', '*', '.', ' ', ' '];
/// Scrolling bottom grass line.
pub const GROUND_GRASS: [char; 4] = ['^', '"', 'v', '\''];
pub const STEM: char = '|';
pub const LEFT_LEAF: char = '\\';
pub const RIGHT_LEAF: char = '/';

/// Width of the widest row of a shape.
pub fn shape_width(shape: &[&str]) -> usize {
    shape.iter().map(|row| row.chars().count()).max().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudKind {
    Billow,
    Puff,
    Streak,
}

impl CloudKind {
    pub const ALL: [CloudKind; 3] = [CloudKind::Billow, CloudKind::Puff, CloudKind::Streak];

    pub fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn shape(&self) -> &'static [&'static str] {
        match self {
            CloudKind::Billow => &["  .-~~-.  ", ".'      `.", "'~~~~~~~~'"],
            CloudKind::Puff => &[" .--.  ", "(    ) ", " `--'  "],
            CloudKind::Streak => &["   .~~.  ", ".-'    '-.", "'~~~~~~~~'"],
        }
    }

    pub fn width(&self) -> usize {
        shape_width(self.shape())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Pine,
    Round,
    Willow,
}

impl TreeKind {
    pub const ALL: [TreeKind; 3] = [TreeKind::Pine, TreeKind::Round, TreeKind::Willow];

    /// Tree templates are 7 columns wide; the trunk sits at column 3.
    pub const WIDTH: usize = 7;
    pub const TRUNK_OFFSET: i32 = 3;

    pub fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn shape(&self) -> &'static [&'static str] {
        match self {
            TreeKind::Pine => &["   ^   ", "  /|\\  ", " /_|_\\ ", "   |   "],
            TreeKind::Round => &["  .%.  ", " (%%%) ", "  )|(  ", "   |   "],
            TreeKind::Willow => &["  ,*,  ", " /|||\\", "  |||  ", "   |   "],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowerHead {
    Rose,
    Daisy,
    Bud,
    Thistle,
    Curl,
}

impl FlowerHead {
    pub const ALL: [FlowerHead; 5] = [
        FlowerHead::Rose,
        FlowerHead::Daisy,
        FlowerHead::Bud,
        FlowerHead::Thistle,
        FlowerHead::Curl,
    ];

    pub fn glyph(&self) -> char {
        match self {
            FlowerHead::Rose => '@',
            FlowerHead::Daisy => '*',
            FlowerHead::Bud => 'o',
            FlowerHead::Thistle => '%',
            FlowerHead::Curl => '&',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrassKind {
    Tuft,
    Sprig,
    Reeds,
}

impl GrassKind {
    pub const ALL: [GrassKind; 3] = [GrassKind::Tuft, GrassKind::Sprig, GrassKind::Reeds];

    pub fn shape(&self) -> &'static [&'static str] {
        match self {
            GrassKind::Tuft => &["\\|/"],
            GrassKind::Sprig => &[",|,"],
            GrassKind::Reeds => &[" ) ", "\\|(|"],
        }
    }

    pub fn width(&self) -> usize {
        shape_width(self.shape())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RockKind {
    Pebble,
    Stone,
    Boulder,
}

impl RockKind {
    pub const ALL: [RockKind; 3] = [RockKind::Pebble, RockKind::Stone, RockKind::Boulder];

    pub fn shape(&self) -> &'static [&'static str] {
        match self {
            RockKind::Pebble => &["o."],
            RockKind::Stone => &["(_)"],
            RockKind::Boulder => &[" .-. ", "(___)"],
        }
    }

    pub fn width(&self) -> usize {
        shape_width(self.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_at_floors_and_wraps() {
        assert_eq!(frame_at(0.0, 3), 0);
        assert_eq!(frame_at(1.99, 3), 1);
        assert_eq!(frame_at(3.2, 3), 0);
        assert_eq!(frame_at(-1.0, 3), 0);
        assert_eq!(frame_at(5.0, 0), 0);
    }

    #[test]
    fn catalogs_cycle_by_index() {
        assert_eq!(TreeKind::cycle(0), TreeKind::Pine);
        assert_eq!(TreeKind::cycle(4), TreeKind::Round);
        assert_eq!(CloudKind::cycle(2), CloudKind::Streak);
    }

    #[test]
    fn tree_templates_fit_declared_width() {
        for kind in TreeKind::ALL {
            assert!(shape_width(kind.shape()) <= TreeKind::WIDTH);
            assert_eq!(kind.shape().len(), 4);
        }
    }

    #[test]
    fn widths_cover_widest_row() {
        assert_eq!(CloudKind::Billow.width(), 10);
        assert_eq!(GrassKind::Reeds.width(), 4);
        assert_eq!(RockKind::Boulder.width(), 5);
        assert_eq!(RockKind::Pebble.width(), 2);
    }
}
