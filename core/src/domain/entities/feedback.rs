//! Guest feedback on listings: ratings, per-criterion rates, likes and comments.

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::errors::ValidationError;

fn item_or_user(field: &str, item_id: i64, user_id: i64) -> Option<i64> {
    match field {
        "item_id" => Some(item_id),
        "user_id" => Some(user_id),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub rating_id: i64,
    pub item_id: i64,
    pub total_rate: i32,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRating {
    pub item_id: i64,
    pub total_rate: i32,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPatch {
    pub total_rate: Option<i32>,
}

impl Record for Rating {
    const RESOURCE: &'static str = "Rating";
    const FILTERS: &'static [&'static str] = &["item_id", "user_id"];

    type New = NewRating;
    type Patch = RatingPatch;

    fn from_new(new: NewRating) -> Self {
        Self {
            rating_id: 0,
            item_id: new.item_id,
            total_rate: new.total_rate,
            user_id: new.user_id,
        }
    }

    fn id(&self) -> i64 {
        self.rating_id
    }

    fn set_id(&mut self, id: i64) {
        self.rating_id = id;
    }

    fn apply(&mut self, patch: RatingPatch) {
        if let Some(total_rate) = patch.total_rate {
            self.total_rate = total_rate;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        item_or_user(field, self.item_id, self.user_id)
    }
}

/// Score for a single criterion ("cleanliness", "location", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub rate_id: i64,
    pub rate_title: String,
    pub rate: i32,
    pub item_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRate {
    pub rate_title: String,
    pub rate: i32,
    pub item_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePatch {
    pub rate_title: Option<String>,
    pub rate: Option<i32>,
}

impl Record for Rate {
    const RESOURCE: &'static str = "Rate";
    const FILTERS: &'static [&'static str] = &["item_id", "user_id"];

    type New = NewRate;
    type Patch = RatePatch;

    fn from_new(new: NewRate) -> Self {
        Self {
            rate_id: 0,
            rate_title: new.rate_title,
            rate: new.rate,
            item_id: new.item_id,
            user_id: new.user_id,
        }
    }

    fn id(&self) -> i64 {
        self.rate_id
    }

    fn set_id(&mut self, id: i64) {
        self.rate_id = id;
    }

    fn apply(&mut self, patch: RatePatch) {
        if let Some(rate_title) = patch.rate_title {
            self.rate_title = rate_title;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("rate_title", &self.rate_title, 1, 255)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        item_or_user(field, self.item_id, self.user_id)
    }
}

/// A user's favorite listing; a user likes a listing at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub like_id: i64,
    pub user_id: i64,
    pub item_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLike {
    pub user_id: i64,
    pub item_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikePatch {
    pub item_id: Option<i64>,
}

impl Record for Like {
    const RESOURCE: &'static str = "Like";
    const FILTERS: &'static [&'static str] = &["user_id", "item_id"];

    type New = NewLike;
    type Patch = LikePatch;

    fn from_new(new: NewLike) -> Self {
        Self {
            like_id: 0,
            user_id: new.user_id,
            item_id: new.item_id,
        }
    }

    fn id(&self) -> i64 {
        self.like_id
    }

    fn set_id(&mut self, id: i64) {
        self.like_id = id;
    }

    fn apply(&mut self, patch: LikePatch) {
        if let Some(item_id) = patch.item_id {
            self.item_id = item_id;
        }
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("user_item", format!("{}:{}", self.user_id, self.item_id))]
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        item_or_user(field, self.item_id, self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSection {
    pub comment_id: i64,
    pub item_id: i64,
    pub user_id: i64,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub item_id: i64,
    pub user_id: i64,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPatch {
    pub comment: Option<String>,
}

impl Record for CommentSection {
    const RESOURCE: &'static str = "Comment";
    const FILTERS: &'static [&'static str] = &["item_id", "user_id"];

    type New = NewComment;
    type Patch = CommentPatch;

    fn from_new(new: NewComment) -> Self {
        Self {
            comment_id: 0,
            item_id: new.item_id,
            user_id: new.user_id,
            comment: new.comment,
        }
    }

    fn id(&self) -> i64 {
        self.comment_id
    }

    fn set_id(&mut self, id: i64) {
        self.comment_id = id;
    }

    fn apply(&mut self, patch: CommentPatch) {
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !jb_shared::validation::not_empty(&self.comment) {
            return Err(ValidationError::required("comment"));
        }
        Ok(())
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        item_or_user(field, self.item_id, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_unique_per_user_and_item() {
        let a = Like::from_new(NewLike { user_id: 1, item_id: 2 });
        let b = Like::from_new(NewLike { user_id: 1, item_id: 2 });
        let c = Like::from_new(NewLike { user_id: 2, item_id: 1 });
        assert_eq!(a.unique_keys(), b.unique_keys());
        assert_ne!(a.unique_keys(), c.unique_keys());
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let comment = CommentSection::from_new(NewComment {
            item_id: 1,
            user_id: 1,
            comment: "   ".to_string(),
        });
        assert_eq!(comment.validate(), Err(ValidationError::required("comment")));
    }

    #[test]
    fn test_rating_filters() {
        let rating = Rating::from_new(NewRating {
            item_id: 3,
            total_rate: 4,
            user_id: 5,
        });
        assert_eq!(rating.filter_value("item_id"), Some(3));
        assert_eq!(rating.filter_value("user_id"), Some(5));
        assert_eq!(rating.filter_value("rating_id"), None);
    }
}
