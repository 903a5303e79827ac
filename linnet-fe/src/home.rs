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

//! # linnet-fe Home component

use leptos::prelude::*;
use tracing::debug;

use crate::{feed::FeedScope, posts::FeedPanel};

/// The linnet home page: everyone's recent posts
#[component]
pub fn Home() -> impl IntoView {
    debug!("Home invoked.");
    view! {
        <div class="feed-view">
            <FeedPanel scope=FeedScope::Recent/>
        </div>
    }
}
