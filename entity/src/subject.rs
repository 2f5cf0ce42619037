//! The planet-or-character reference shared by posts, media and favorites.
//!
//! Those tables carry two nullable foreign keys, `planet_id` and `character_id`.
//! [`Subject`] is the only shape the application is allowed to write into them,
//! and [`ensure_single_subject`] is the write guard their entities run before
//! every insert and update. Partial updates leave columns `NotSet`; the guards
//! resolve those from the stored row before validating.

use sea_orm::{ActiveValue, DbErr};

use crate::sea_orm_active_enums::PostType;

/// Exactly one of a planet or a character, by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Planet(i32),
    Character(i32),
}

impl Subject {
    /// The post type a post about this subject must carry.
    pub fn post_type(&self) -> PostType {
        match self {
            Self::Planet(_) => PostType::Planet,
            Self::Character(_) => PostType::Character,
        }
    }

    /// Column values as `(planet_id, character_id)`.
    pub fn columns(&self) -> (Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None),
            Self::Character(id) => (None, Some(id)),
        }
    }

    /// Returns `None` when neither or both columns are set.
    pub fn from_columns(planet_id: Option<i32>, character_id: Option<i32>) -> Option<Self> {
        match (planet_id, character_id) {
            (Some(id), None) => Some(Self::Planet(id)),
            (None, Some(id)) => Some(Self::Character(id)),
            _ => None,
        }
    }
}

pub(crate) fn current<V: Clone + Into<sea_orm::Value>>(value: &ActiveValue<V>) -> Option<V> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v.clone()),
        ActiveValue::NotSet => None,
    }
}

/// The value a column holds once a write lands: the active value when present, otherwise
/// the value from the stored row.
pub(crate) fn resolve<V: Clone + Into<sea_orm::Value>>(
    value: &ActiveValue<V>,
    stored: Option<V>,
) -> Option<V> {
    current(value).or(stored)
}

/// Checks that a resolved foreign key pair names exactly one subject.
pub(crate) fn ensure_single_subject(
    table: &str,
    planet_id: Option<i32>,
    character_id: Option<i32>,
) -> Result<Subject, DbErr> {
    Subject::from_columns(planet_id, character_id).ok_or_else(|| {
        DbErr::Custom(format!(
            "{table} must reference exactly one of planet or character \
             (planet_id: {planet_id:?}, character_id: {character_id:?})"
        ))
    })
}

/// Checks that a post's resolved type matches the subject it references.
pub(crate) fn ensure_post_type(post_type: Option<PostType>, subject: Subject) -> Result<(), DbErr> {
    match post_type {
        Some(post_type) if post_type != subject.post_type() => Err(DbErr::Custom(format!(
            "post type {post_type:?} does not match subject {subject:?}"
        ))),
        _ => Ok(()),
    }
}
