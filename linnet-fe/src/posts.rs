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

//! # linnet-fe post-list components
//!
//! [FeedPanel] is the rendered face of a [FeedReconciler]: it builds one reconciler per page
//! activation, wires its collaborators to the browser (gloo-net, localStorage, the router),
//! and mirrors the reconciler's [ViewState] into a signal after every operation.

use leptos::{either::EitherOf3, prelude::*, task::spawn_local};
use tracing::debug;

use linnet_shared::{Post, PostId};

use crate::{
    feed::{CallbackNavigator, FeedReconciler, FeedScope, ViewState},
    http::HttpPostsApi,
    session::BrowserSession,
    types::Api,
};

use std::rc::Rc;

/// Render a single [Post], with its like control
#[component]
pub fn PostCard(post: Post, on_like: Callback<PostId>) -> impl IntoView {
    let posted = post.timestamp().format("%Y-%m-%d %H:%M:%S").to_string();
    let owner = post.owner_username().to_string();
    let id = post.id().clone();
    view! {
        <div class="post">
            <div class="post-text">{ post.text().to_owned() }</div>
            <div class="post-info">
                <div class="post-info-left">
                    <a href={ format!("/u/{owner}") }>{ format!("@{owner}") }</a>
                    " "
                    { posted }
                </div>
                <div class="post-info-right">
                    <a href="#" class="like" on:click=move |ev| {
                        ev.prevent_default();
                        on_like.run(id.clone());
                    }>{ format!("\u{2665} {}", post.likes_count()) }</a>
                </div>
            </div>
        </div>
    }
}

/// One feed's worth of posts
///
/// We expect the API location to be available in the context.
#[component]
pub fn FeedPanel(scope: FeedScope) -> impl IntoView {
    debug!("FeedPanel invoked.");

    let api = use_context::<Api>()
        .expect("No context for the API location!?")
        .0;
    let navigate = leptos_router::hooks::use_navigate();

    let rec = Rc::new(FeedReconciler::new(
        scope,
        Box::new(HttpPostsApi::new(api)),
        Box::new(BrowserSession),
        Box::new(CallbackNavigator::new(move |dest| {
            navigate(dest.path(), Default::default())
        })),
    ));
    let state = RwSignal::new(ViewState::new());

    // One activation per mount; the reconciler checks the session & does the initial load
    {
        let rec = rec.clone();
        spawn_local(async move {
            rec.activate().await;
            state.set(rec.snapshot());
        });
    }

    let toggle = Action::new_unsync(move |id: &PostId| {
        let rec = rec.clone();
        let id = id.clone();
        async move {
            rec.toggle_like(&id).await;
            state.set(rec.snapshot());
        }
    });
    let on_like = Callback::new(move |id: PostId| {
        toggle.dispatch(id);
    });

    view! {
        <div class="post-list">
            {move || {
                let snapshot = state.get();
                if snapshot.loading {
                    EitherOf3::A(view! { <p class="feed-loading">"Loading..."</p> })
                } else if snapshot.posts.is_empty() {
                    EitherOf3::B(view! { <p class="feed-empty">"No posts yet."</p> })
                } else {
                    EitherOf3::C(view! {
                        // Keyed on (id, likes) so a reload with a fresh count re-renders the row
                        <For each=move || state.get().posts
                             key=|post| (post.id().clone(), post.likes_count())
                             let:post>
                            <PostCard post on_like/>
                        </For>
                    })
                }
            }}
        </div>
    }
}
