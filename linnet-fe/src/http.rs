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

//! # linnet-fe HTTP utilities
//!
//! The gloo-net side of the [PostsApi] seam, plus the login call used by the sign-in page.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use tap::Pipe;

use linnet_shared::{
    api::{LoginReq, LoginRsp, API_PREFIX},
    Post, PostId, Username,
};

use crate::{
    feed::{ApiSnafu, Error, NetworkSnafu, PostsApi, Result},
    types::USER_AGENT,
};

fn error_for_status(rsp: Response) -> Result<Response> {
    let status = rsp.status();
    if (200..300).contains(&status) {
        Ok(rsp)
    } else {
        ApiSnafu {
            status,
            message: rsp.status_text(),
        }
        .fail()
    }
}

fn net_err(err: gloo_net::Error) -> Error {
    NetworkSnafu {
        message: err.to_string(),
    }
    .build()
}

/// [PostsApi] over the real wire
pub struct HttpPostsApi {
    api: String,
}

impl HttpPostsApi {
    /// `api` is the scheme-host-port of the backend; paths are appended under [API_PREFIX]
    pub fn new(api: impl Into<String>) -> HttpPostsApi {
        HttpPostsApi { api: api.into() }
    }

    async fn get_posts(&self, url: String) -> Result<Vec<Post>> {
        Request::get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(net_err)?
            .pipe(error_for_status)?
            .json::<Vec<Post>>()
            .await
            .map_err(net_err)?
            .pipe(Ok)
    }
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn recent_posts(&self) -> Result<Vec<Post>> {
        self.get_posts(format!("{}{API_PREFIX}/posts", self.api)).await
    }

    async fn user_posts(&self, username: &Username) -> Result<Vec<Post>> {
        self.get_posts(format!("{}{API_PREFIX}/users/{username}/posts", self.api))
            .await
    }

    async fn like(&self, id: &PostId, token: &str) -> Result<()> {
        Request::post(&format!("{}{API_PREFIX}/posts/{id}/like", self.api))
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(net_err)?
            .pipe(error_for_status)?;
        Ok(())
    }

    async fn unlike(&self, id: &PostId, token: &str) -> Result<()> {
        Request::delete(&format!("{}{API_PREFIX}/posts/{id}/like", self.api))
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(net_err)?
            .pipe(error_for_status)?;
        Ok(())
    }
}

/// Exchange credentials for a bearer token & user record
pub async fn login(api: &str, username: String, password: String) -> Result<LoginRsp> {
    Request::post(&format!("{api}{API_PREFIX}/login"))
        .header("User-Agent", USER_AGENT)
        .json(&LoginReq { username, password })
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?
        .pipe(error_for_status)?
        .json::<LoginRsp>()
        .await
        .map_err(net_err)?
        .pipe(Ok)
}
