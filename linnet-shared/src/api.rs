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

//! # Requests & responses for the linnet API

use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Every endpoint lives under this path prefix
pub const API_PREFIX: &str = "/api";

/// localStorage key under which the bearer token is persisted
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// localStorage key under which the signed-in [User] is persisted (as JSON)
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, Serialize)]
pub struct LoginReq {
    // I first thought to make this a `Username`, but in that case, should the caller fat-finger
    // their username to something illegal, the request would fail client-side with a validation
    // error rather than the server's uniform "incorrect username or password"
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRsp {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Body of a successful like/unlike; informational only
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LikeRsp {
    pub message: String,
}
