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

//! # linnet-fe Profile component

use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_params_map;
use tracing::{debug, error};

use linnet_shared::Username;

use crate::{feed::FeedScope, posts::FeedPanel};

/// One user's posts, at `/u/:username`
///
/// The username path parameter isn't otherwise validated client-side; whether it names a real
/// user is the server's call (an unknown user just comes back as an empty feed).
#[component]
pub fn Profile() -> impl IntoView {
    debug!("Profile invoked.");

    let params = use_params_map();

    view! {
        {move || {
            let text = params.with(|m| m.get("username")).unwrap_or_default();
            match Username::new(&text) {
                Ok(username) => {
                    let heading = format!("@{username}");
                    Either::Left(view! {
                        <div class="feed-view">
                            <h2 class="profile-heading">{ heading }</h2>
                            <FeedPanel scope=FeedScope::User(username)/>
                        </div>
                    })
                }
                Err(err) => {
                    error!("username in path: {err}");
                    Either::Right(view! { <p class="feed-empty">"No such user."</p> })
                }
            }
        }}
    }
}
