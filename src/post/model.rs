use crate::foundation::error::{GridfeedError, GridfeedResult};

/// Closed set of feed post kinds. Each kind has its own footprint row in the shape table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    /// Single or multi-photo post.
    Photo,
    /// Map snapshot.
    Map,
    /// Recorded route (GPX/GeoJSON track).
    Route,
    /// Video post.
    Video,
    /// Long-form written article.
    Write,
    /// Gear list.
    Gear,
    /// Product or place review.
    Review,
}

impl PostType {
    /// Every post type, in declaration order.
    pub const ALL: [PostType; 7] = [
        PostType::Photo,
        PostType::Map,
        PostType::Route,
        PostType::Video,
        PostType::Write,
        PostType::Gear,
        PostType::Review,
    ];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Photo => "photo",
            PostType::Map => "map",
            PostType::Route => "route",
            PostType::Video => "video",
            PostType::Write => "write",
            PostType::Gear => "gear",
            PostType::Review => "review",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author-chosen size hint. `Auto` defers to the layout's auto-size policy.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    /// Let the layout pick.
    #[default]
    Auto,
    /// Small footprint.
    Small,
    /// Medium footprint.
    Medium,
    /// Large footprint.
    Large,
    /// Any other value; resolves to the shape table's fallback footprint.
    #[serde(other)]
    Unknown,
}

impl DisplaySize {
    /// The concrete size class, or `None` for `Auto` and `Unknown`.
    pub fn explicit(self) -> Option<SizeClass> {
        match self {
            DisplaySize::Auto | DisplaySize::Unknown => None,
            DisplaySize::Small => Some(SizeClass::Small),
            DisplaySize::Medium => Some(SizeClass::Medium),
            DisplaySize::Large => Some(SizeClass::Large),
        }
    }
}

/// A resolved (non-auto) size.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Small footprint.
    Small,
    /// Medium footprint.
    Medium,
    /// Large footprint.
    Large,
}

impl SizeClass {
    /// Every size class, smallest first.
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];
}

impl From<SizeClass> for DisplaySize {
    fn from(value: SizeClass) -> Self {
        match value {
            SizeClass::Small => DisplaySize::Small,
            SizeClass::Medium => DisplaySize::Medium,
            SizeClass::Large => DisplaySize::Large,
        }
    }
}

/// One feed post as delivered by the document store.
///
/// Only `id`, `type`, the size hint and `createdAt` matter to layout; everything else rides
/// along untouched in `content`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    /// Stable unique identifier.
    pub id: String,
    /// Post kind.
    #[serde(rename = "type")]
    pub post_type: PostType,
    /// Top-level size hint. Absent means "look in `content`, then auto".
    #[serde(
        rename = "displaySize",
        default,
        deserialize_with = "deserialize_display_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_size: Option<DisplaySize>,
    /// Creation time in seconds since the epoch; only used for ordering.
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "deserialize_created_at"
    )]
    pub created_at: i64,
    /// Opaque payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub content: serde_json::Value,
}

impl Post {
    /// A post with no size hint, timestamp zero and an empty payload.
    pub fn new(id: impl Into<String>, post_type: PostType) -> Self {
        Self {
            id: id.into(),
            post_type,
            display_size: None,
            created_at: 0,
            content: serde_json::Value::Null,
        }
    }

    /// Set the top-level size hint.
    pub fn with_size(mut self, size: DisplaySize) -> Self {
        self.display_size = Some(size);
        self
    }

    /// Set the creation timestamp (seconds).
    pub fn with_created_at(mut self, secs: i64) -> Self {
        self.created_at = secs;
        self
    }

    /// Replace the opaque payload.
    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = content;
        self
    }

    /// Effective size hint: top-level `displaySize`, else `content.displaySize`, else auto.
    ///
    /// A nested value that is present but not a known size string is [`DisplaySize::Unknown`].
    pub fn size_hint(&self) -> DisplaySize {
        if let Some(size) = self.display_size {
            return size;
        }
        match self.content.get("displaySize") {
            None | Some(serde_json::Value::Null) => DisplaySize::Auto,
            Some(v) => serde_json::from_value(v.clone()).unwrap_or(DisplaySize::Unknown),
        }
    }

    /// Check the fields layout relies on.
    pub fn validate(&self) -> GridfeedResult<()> {
        if self.id.trim().is_empty() {
            return Err(GridfeedError::validation("post id must be non-empty"));
        }
        Ok(())
    }
}

// Unrecognized hints (other strings, numbers, objects) become `Unknown` instead of failing
// the whole post.
fn deserialize_display_size<'de, D>(deserializer: D) -> Result<Option<DisplaySize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<serde_json::Value> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(v) => Some(serde_json::from_value(v).unwrap_or(DisplaySize::Unknown)),
    })
}

// Store exports carry either plain seconds or a `{ seconds, nanoseconds }` timestamp object.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CreatedAtRepr {
    Seconds(i64),
    Float(f64),
    Timestamp { seconds: i64 },
    Missing(()),
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let repr = <CreatedAtRepr as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match repr {
        CreatedAtRepr::Seconds(s) => s,
        CreatedAtRepr::Float(s) => s.floor() as i64,
        CreatedAtRepr::Timestamp { seconds } => seconds,
        CreatedAtRepr::Missing(()) => 0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/post/model.rs"]
mod tests;
