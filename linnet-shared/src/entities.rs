// Copyright (C) 2026 the linnet developers
//
// This file is part of linnet.
//
// linnet is free software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// linnet is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even
// the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with linnet.  If not,
// see <http://www.gnu.org/licenses/>.

//! # linnet entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use snafu::{prelude::*, Backtrace};
use unicode_segmentation::UnicodeSegmentation;

use std::{fmt::Display, ops::Deref, str::FromStr};

type StdResult<T, E> = std::result::Result<T, E>;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                       module Error type                                        //
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{text} is not a valid username"))]
    Username { text: String, backtrace: Backtrace },
}

type Result<T> = std::result::Result<T, Error>;

fn mk_serde_de_err<'de, D: serde::Deserializer<'de>>(err: impl std::error::Error) -> D::Error {
    <D::Error as serde::de::Error>::custom(format!("{:?}", err))
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                          Identifiers                                           //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Declare a newtype struct intended to be used as an opaque identifier for some other sort of
/// entity.
///
/// The backend hands these out as strings (UUIDs today, but nothing here should depend on that),
/// so the wrapped type is [String]-- the client's only obligations are to hold onto identifiers
/// and to interpolate them into request paths. I just couldn't bring myself to use the same type
/// to represent identifiers for users and posts at the same time.
macro_rules! define_id {
    ($type_name:ident) => {
        #[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $type_name(String);
        impl $type_name {
            pub fn new(s: impl Into<String>) -> $type_name {
                $type_name(s.into())
            }
        }
        impl Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
        impl AsRef<str> for $type_name {
            fn as_ref(&self) -> &str {
                self.deref()
            }
        }
        impl Deref for $type_name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
        impl From<$type_name> for String {
            fn from(value: $type_name) -> Self {
                value.0
            }
        }
        impl From<&str> for $type_name {
            fn from(value: &str) -> Self {
                $type_name(value.to_owned())
            }
        }
    };
}

define_id!(UserId);
define_id!(PostId);

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                            Username                                            //
////////////////////////////////////////////////////////////////////////////////////////////////////

const MAX_USERNAME_LENGTH: usize = 64;

fn check_username(s: &str) -> bool {
    [
        !s.is_empty(),
        UnicodeSegmentation::graphemes(s, true).count() <= MAX_USERNAME_LENGTH,
        !s.contains(char::is_whitespace),
        !s.contains('/'),
    ]
    .into_iter()
    .all(|x| x)
}

/// A linnet username. Usernames may be up to 64 graphemes, and may not contain whitespace or '/'
/// (they appear as a single path segment in `/users/{username}/posts`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Correct-by-construction [Username] constructor
    pub fn new(text: &str) -> Result<Username> {
        check_username(text)
            .then_some(Username(text.to_string()))
            .ok_or(
                UsernameSnafu {
                    text: text.to_string(),
                }
                .build(),
            )
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.deref()
    }
}

impl Deref for Username {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

// Implement `Deserialize` by hand to fail if the serialized value isn't a legit `Username`
impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Username::try_from(s).map_err(mk_serde_de_err::<'de, D>)
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Username {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Username::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(text: String) -> std::result::Result<Self, Self::Error> {
        if check_username(&text) {
            Ok(Username(text))
        } else {
            UsernameSnafu { text }.fail()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              User                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The authenticated viewer's display identity, as the backend reports it at login
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: Username,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Post                                              //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Represents a linnet post
///
/// Immutable from the client's perspective: the like count in particular is never edited
/// locally-- the client re-fetches the whole list after any mutation and takes whatever the
/// server says (see the feed module in `linnet-fe`).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Post {
    id: PostId,
    text: String,
    timestamp: DateTime<Utc>,
    owner_id: UserId,
    owner_username: Username,
    likes_count: u64,
}

impl Post {
    pub fn new(
        id: &PostId,
        text: &str,
        timestamp: &DateTime<Utc>,
        owner_id: &UserId,
        owner_username: &Username,
        likes_count: u64,
    ) -> Post {
        Post {
            id: id.clone(),
            text: text.to_string(),
            timestamp: *timestamp,
            owner_id: owner_id.clone(),
            owner_username: owner_username.clone(),
            likes_count,
        }
    }
    pub fn id(&self) -> &PostId {
        &self.id
    }
    pub fn likes_count(&self) -> u64 {
        self.likes_count
    }
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
    pub fn owner_username(&self) -> &Username {
        &self.owner_username
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn username() {
        assert!(Username::new("").is_err());
        assert!(Username::new("foo bar").is_err());
        assert!(Username::new("foo/bar").is_err());
        assert!(Username::new(&"na".repeat(65)).is_err());
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("我不知道怕在哪里").is_ok());
    }

    #[test]
    fn post_from_json() {
        // The wire format, verbatim
        let text = r#"{"id":"p1", "text":"hi", "timestamp":"2024-01-01T00:00:00Z",
                       "owner_id":"u1", "owner_username":"alice", "likes_count":3}"#;
        let post: Post = serde_json::from_str(text).unwrap();
        assert_eq!(post.id(), &PostId::from("p1"));
        assert_eq!(post.text(), "hi");
        assert_eq!(post.owner_id(), &UserId::from("u1"));
        assert_eq!(post.owner_username(), &Username::new("alice").unwrap());
        assert_eq!(post.likes_count(), 3);
        assert_eq!(
            post.timestamp(),
            "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn posts_in_api_order() {
        let text = r#"[{"id":"p2", "text":"later", "timestamp":"2024-01-02T00:00:00Z",
                        "owner_id":"u1", "owner_username":"alice", "likes_count":0},
                       {"id":"p1", "text":"earlier", "timestamp":"2024-01-01T00:00:00Z",
                        "owner_id":"u1", "owner_username":"alice", "likes_count":3}]"#;
        let posts: Vec<Post> = serde_json::from_str(text).unwrap();
        // Order as received; the client never re-sorts
        assert_eq!(
            posts.iter().map(|p| p.id().as_ref()).collect::<Vec<_>>(),
            vec!["p2", "p1"]
        );
    }
}
