use std::collections::BTreeMap;

use crate::{
    foundation::error::{GridfeedError, GridfeedResult},
    post::model::{DisplaySize, Post, PostType, SizeClass},
};

/// Footprint of a post in grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    /// Width in cells.
    pub w: usize,
    /// Height in cells.
    pub h: usize,
}

impl Shape {
    /// Build a `w x h` shape.
    pub const fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// Shape used when a `(type, size)` pair has no table entry: photo/medium.
pub const DEFAULT_SHAPE: Shape = Shape::new(3, 3);

const STANDARD_SHAPES: [(PostType, [Shape; 3]); 7] = [
    (PostType::Photo, [Shape::new(2, 2), Shape::new(3, 3), Shape::new(4, 4)]),
    (PostType::Map, [Shape::new(3, 2), Shape::new(4, 3), Shape::new(6, 4)]),
    (PostType::Route, [Shape::new(3, 2), Shape::new(4, 3), Shape::new(6, 4)]),
    (PostType::Video, [Shape::new(4, 2), Shape::new(5, 3), Shape::new(6, 4)]),
    (PostType::Write, [Shape::new(2, 2), Shape::new(3, 3), Shape::new(4, 5)]),
    (PostType::Gear, [Shape::new(2, 2), Shape::new(2, 3), Shape::new(3, 4)]),
    (PostType::Review, [Shape::new(2, 2), Shape::new(3, 3), Shape::new(4, 4)]),
];

/// Lookup table `(post type, size) -> shape`.
///
/// Serializes as a nested JSON object, e.g. `{"photo": {"small": {"w": 2, "h": 2}}}`, so a
/// config file can carry a partial or custom table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ShapeTable {
    entries: BTreeMap<PostType, BTreeMap<SizeClass, Shape>>,
}

impl Default for ShapeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShapeTable {
    /// The built-in feed table.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for (post_type, shapes) in STANDARD_SHAPES {
            for (size, shape) in SizeClass::ALL.into_iter().zip(shapes) {
                table.insert(post_type, size, shape);
            }
        }
        table
    }

    /// A table with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set one entry, returning the previous shape if any.
    pub fn insert(&mut self, post_type: PostType, size: SizeClass, shape: Shape) -> Option<Shape> {
        self.entries
            .entry(post_type)
            .or_default()
            .insert(size, shape)
    }

    /// Look up one entry.
    pub fn get(&self, post_type: PostType, size: SizeClass) -> Option<Shape> {
        self.entries.get(&post_type)?.get(&size).copied()
    }

    /// Shape substituted for missing entries: this table's photo/medium, else [`DEFAULT_SHAPE`].
    pub fn fallback(&self) -> Shape {
        self.get(PostType::Photo, SizeClass::Medium)
            .unwrap_or(DEFAULT_SHAPE)
    }

    /// All entries in `(type, size)` order.
    pub fn iter(&self) -> impl Iterator<Item = (PostType, SizeClass, Shape)> + '_ {
        self.entries
            .iter()
            .flat_map(|(&t, sizes)| sizes.iter().map(move |(&s, &shape)| (t, s, shape)))
    }

    /// Widest shape in the table, including the fallback.
    pub fn widest(&self) -> usize {
        self.iter()
            .map(|(_, _, s)| s.w)
            .fold(self.fallback().w, usize::max)
    }

    /// Reject zero-sized entries.
    pub fn validate(&self) -> GridfeedResult<()> {
        for (post_type, size, shape) in self.iter() {
            if shape.w == 0 || shape.h == 0 {
                return Err(GridfeedError::validation(format!(
                    "shape for {post_type}/{size:?} must have w>0 and h>0"
                )));
            }
        }
        Ok(())
    }
}

/// Chooses a concrete size for posts whose hint is `auto` or absent.
///
/// The shipped policy is [`FixedMedium`]; content-aware policies (aspect ratio, text length)
/// plug in here. Closures `Fn(&Post) -> SizeClass` implement it too.
pub trait AutoSizePolicy {
    /// Size to use for `post`.
    fn size_for(&self, post: &Post) -> SizeClass;
}

/// Every auto-sized post is medium.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedMedium;

impl AutoSizePolicy for FixedMedium {
    fn size_for(&self, _post: &Post) -> SizeClass {
        SizeClass::Medium
    }
}

impl<F> AutoSizePolicy for F
where
    F: Fn(&Post) -> SizeClass,
{
    fn size_for(&self, post: &Post) -> SizeClass {
        self(post)
    }
}

/// Outcome of shape resolution for one post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedShape {
    /// Footprint in cells.
    pub shape: Shape,
    /// Size class the footprint corresponds to.
    pub size: SizeClass,
    /// True when the table had no entry and the fallback shape was substituted.
    pub fallback: bool,
}

/// Resolve a post's footprint: explicit hint or auto policy, then table lookup, then fallback.
///
/// An unrecognized hint has no table entry and takes the fallback.
pub fn resolve_shape(
    post: &Post,
    table: &ShapeTable,
    policy: &(impl AutoSizePolicy + ?Sized),
) -> ResolvedShape {
    let hint = post.size_hint();
    let size = match hint {
        DisplaySize::Auto => Some(policy.size_for(post)),
        other => other.explicit(),
    };

    let entry = size.and_then(|size| table.get(post.post_type, size).map(|shape| (size, shape)));
    match entry {
        Some((size, shape)) => ResolvedShape {
            shape,
            size,
            fallback: false,
        },
        None => {
            tracing::trace!(
                post_id = %post.id,
                post_type = %post.post_type,
                ?hint,
                ?size,
                "no shape entry; using fallback"
            );
            ResolvedShape {
                shape: table.fallback(),
                size: SizeClass::Medium,
                fallback: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/shape.rs"]
mod tests;
