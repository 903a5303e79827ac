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

//! # linnet-fe feed reconciliation
//!
//! The one piece of this app with any real design content: keeping the rendered post list
//! synchronized with server state, and toggling a post's like status when the client doesn't
//! track per-post "have I liked this" state locally.
//!
//! [FeedReconciler] is deliberately free of any browser or framework types; its three
//! collaborators (the posts API, the session store, navigation) come in behind traits so the
//! whole flow runs under `cargo test` on the host with mocks. The wasm-side implementations
//! live in the `http` and `session` modules.

use async_trait::async_trait;
use snafu::prelude::*;
use tracing::{debug, error, info};

use linnet_shared::{Post, PostId, Username};

use crate::session::{Session, SessionStore};

use std::cell::RefCell;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                       module Error type                                        //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Network-layer failure modes, as coarse as the UI's handling of them
///
/// `Clone` is intentional: leptos `Action` values must be `Clone`, and we'd rather not box
/// source errors to get there-- the adapters flatten their sources to strings instead.
#[derive(Clone, Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("transport failure reaching the API: {message}"))]
    Network { message: String },
    #[snafu(display("the API returned {status}: {message}"))]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                         collaborators                                          //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// What a feed shows: everyone's recent posts, or one user's
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedScope {
    Recent,
    User(Username),
}

/// Abstract navigation targets; the router mapping lives with the caller
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    Home,
    Login,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => "/login",
        }
    }
}

/// The remote posts API, reduced to the four calls the feed needs
#[async_trait(?Send)]
pub trait PostsApi {
    async fn recent_posts(&self) -> Result<Vec<Post>>;
    async fn user_posts(&self, username: &Username) -> Result<Vec<Post>>;
    async fn like(&self, id: &PostId, token: &str) -> Result<()>;
    async fn unlike(&self, id: &PostId, token: &str) -> Result<()>;
}

pub trait Navigator {
    fn navigate(&self, to: Destination);
}

/// [Navigator] in terms of a closure; lets the leptos router's `use_navigate` handle slot in
/// without this module knowing anything about it
pub struct CallbackNavigator(Box<dyn Fn(Destination)>);

impl CallbackNavigator {
    pub fn new(f: impl Fn(Destination) + 'static) -> CallbackNavigator {
        CallbackNavigator(Box::new(f))
    }
}

impl Navigator for CallbackNavigator {
    fn navigate(&self, to: Destination) {
        (self.0)(to)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                           ViewState                                            //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Transient per-activation state: the current post list, the loading flag, and the resolved
/// session
///
/// The post list is always a full, server-authoritative snapshot. On a failed reload it keeps
/// its previous value-- stale-but-present, never partial.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub session: Option<Session>,
    pub posts: Vec<Post>,
    pub loading: bool,
}

impl ViewState {
    pub fn new() -> ViewState {
        ViewState {
            session: None,
            posts: Vec::new(),
            loading: true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                         FeedReconciler                                         //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Owns the fetch-render-mutate cycle for one feed
///
/// State sits behind a [RefCell] so that concurrent operations (a user mashing like buttons
/// while a reload is in flight) can share `&self`; borrows are never held across an await, so
/// racing calls only contend for the cell momentarily. Their reloads race independently and
/// the last one to complete wins-- there is no per-post sequencing.
pub struct FeedReconciler {
    scope: FeedScope,
    api: Box<dyn PostsApi>,
    session: Box<dyn SessionStore>,
    nav: Box<dyn Navigator>,
    state: RefCell<ViewState>,
}

impl FeedReconciler {
    pub fn new(
        scope: FeedScope,
        api: Box<dyn PostsApi>,
        session: Box<dyn SessionStore>,
        nav: Box<dyn Navigator>,
    ) -> FeedReconciler {
        FeedReconciler {
            scope,
            api,
            session,
            nav,
            state: RefCell::new(ViewState::new()),
        }
    }

    /// Clone out the current [ViewState]; callers mirror this into reactive state after each
    /// operation
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Begin one page activation: check for a session, then load the feed
    ///
    /// With no session present this makes *no* API calls; it hands control to the sign-in page
    /// and is done. Not an error, so not logged as one.
    pub async fn activate(&self) {
        match self.session.get() {
            None => {
                info!("no session; handing off to sign-in");
                self.nav.navigate(Destination::Login);
            }
            Some(session) => {
                self.state.borrow_mut().session = Some(session);
                self.reload().await;
            }
        }
    }

    /// Replace the post list with a fresh server snapshot
    ///
    /// Idempotent. On failure the previous list stays put and the failure is only logged; the
    /// user sees a stale list rather than an error page.
    pub async fn reload(&self) {
        let result = match &self.scope {
            FeedScope::Recent => self.api.recent_posts().await,
            FeedScope::User(username) => self.api.user_posts(username).await,
        };
        let mut state = self.state.borrow_mut();
        match result {
            Ok(posts) => {
                debug!("loaded {} posts", posts.len());
                // Order as received; the server already sorts newest-first
                state.posts = posts;
            }
            Err(err) => error!("reloading the feed: {err}"),
        }
        state.loading = false;
    }

    /// Toggle the viewer's like on `id`
    ///
    /// The client doesn't know whether the viewer has already liked this post, so it can't
    /// know a priori whether to like or unlike. Optimistically try a like; the server rejects
    /// a duplicate, and that rejection is the only signal we get, so read it as "already
    /// liked" and flip to an unlike. Either way a success is followed by a full reload for the
    /// authoritative count. If both calls fail the toggle is a visible no-op.
    pub async fn toggle_like(&self, id: &PostId) {
        let token = self
            .state
            .borrow()
            .session
            .as_ref()
            .map(|session| session.token.clone());
        let Some(token) = token else {
            debug!("toggle-like with no session; ignored");
            return;
        };
        let like_err = match self.api.like(id, &token).await {
            Ok(()) => return self.reload().await,
            Err(err) => err,
        };
        match self.api.unlike(id, &token).await {
            Ok(()) => self.reload().await,
            Err(unlike_err) => {
                error!("toggling like on {id} failed both ways: like: {like_err}; unlike: {unlike_err}")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use chrono::{DateTime, Utc};
    use futures::executor::block_on;
    use linnet_shared::{User, UserId};

    use std::{collections::VecDeque, rc::Rc};

    fn post(id: &str, likes: u64) -> Post {
        Post::new(
            &PostId::from(id),
            "hi",
            &"2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            &UserId::from("u1"),
            &Username::new("alice").unwrap(),
            likes,
        )
    }

    fn session() -> Session {
        Session {
            token: "alice-token".to_owned(),
            user: User {
                id: UserId::from("1"),
                username: Username::new("alice").unwrap(),
            },
        }
    }

    fn api_err() -> Error {
        ApiSnafu {
            status: 400u16,
            message: "Already liked this post".to_owned(),
        }
        .build()
    }

    /// Records every call made against it, in order
    struct MockApi {
        calls: Rc<RefCell<Vec<String>>>,
        fetches: RefCell<VecDeque<Result<Vec<Post>>>>,
        like_result: Result<()>,
        unlike_result: Result<()>,
    }

    impl MockApi {
        fn new(calls: Rc<RefCell<Vec<String>>>) -> MockApi {
            MockApi {
                calls,
                fetches: RefCell::new(VecDeque::new()),
                like_result: Ok(()),
                unlike_result: Ok(()),
            }
        }
        fn with_fetch(self, result: Result<Vec<Post>>) -> MockApi {
            self.fetches.borrow_mut().push_back(result);
            self
        }
        fn with_like(mut self, result: Result<()>) -> MockApi {
            self.like_result = result;
            self
        }
        fn with_unlike(mut self, result: Result<()>) -> MockApi {
            self.unlike_result = result;
            self
        }
        fn next_fetch(&self) -> Result<Vec<Post>> {
            self.fetches
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    #[async_trait(?Send)]
    impl PostsApi for MockApi {
        async fn recent_posts(&self) -> Result<Vec<Post>> {
            self.calls.borrow_mut().push("get recent".to_owned());
            self.next_fetch()
        }
        async fn user_posts(&self, username: &Username) -> Result<Vec<Post>> {
            self.calls.borrow_mut().push(format!("get {username}"));
            self.next_fetch()
        }
        async fn like(&self, id: &PostId, _token: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("like {id}"));
            self.like_result.clone()
        }
        async fn unlike(&self, id: &PostId, _token: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("unlike {id}"));
            self.unlike_result.clone()
        }
    }

    struct MockSession(Option<Session>);

    impl SessionStore for MockSession {
        fn get(&self) -> Option<Session> {
            self.0.clone()
        }
        fn save(&self, _session: &Session) {}
        fn clear(&self) {}
    }

    struct MockNav(Rc<RefCell<Vec<Destination>>>);

    impl Navigator for MockNav {
        fn navigate(&self, to: Destination) {
            self.0.borrow_mut().push(to);
        }
    }

    struct Fixture {
        calls: Rc<RefCell<Vec<String>>>,
        navs: Rc<RefCell<Vec<Destination>>>,
        rec: FeedReconciler,
    }

    fn fixture(
        scope: FeedScope,
        session: Option<Session>,
        build: impl FnOnce(MockApi) -> MockApi,
    ) -> Fixture {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let navs = Rc::new(RefCell::new(Vec::new()));
        let rec = FeedReconciler::new(
            scope,
            Box::new(build(MockApi::new(calls.clone()))),
            Box::new(MockSession(session)),
            Box::new(MockNav(navs.clone())),
        );
        Fixture { calls, navs, rec }
    }

    fn alice() -> FeedScope {
        FeedScope::User(Username::new("alice").unwrap())
    }

    #[test]
    fn activate_without_session_redirects_and_fetches_nothing() {
        let fx = fixture(alice(), None, |api| api);
        block_on(fx.rec.activate());
        assert!(fx.calls.borrow().is_empty());
        assert_eq!(*fx.navs.borrow(), vec![Destination::Login]);
    }

    #[test]
    fn activate_loads_posts_in_api_order() {
        let fx = fixture(alice(), Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p2", 0), post("p1", 3)]))
        });
        block_on(fx.rec.activate());
        let state = fx.rec.snapshot();
        assert!(!state.loading);
        assert_eq!(
            state.posts.iter().map(|p| p.id().as_ref()).collect::<Vec<_>>(),
            vec!["p2", "p1"]
        );
        assert_eq!(*fx.calls.borrow(), vec!["get alice"]);
        assert!(fx.navs.borrow().is_empty());
    }

    #[test]
    fn empty_feed_yields_empty_list() {
        let fx = fixture(alice(), Some(session()), |api| api.with_fetch(Ok(vec![])));
        block_on(fx.rec.activate());
        let state = fx.rec.snapshot();
        assert!(!state.loading);
        assert!(state.posts.is_empty());
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let fx = fixture(alice(), Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p1", 3)]))
                .with_fetch(Err(api_err()))
        });
        block_on(fx.rec.activate());
        block_on(fx.rec.reload());
        let state = fx.rec.snapshot();
        assert!(!state.loading);
        assert_eq!(state.posts, vec![post("p1", 3)]);
    }

    #[test]
    fn toggle_like_success_reloads_once() {
        let fx = fixture(alice(), Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p1", 3)]))
                .with_fetch(Ok(vec![post("p1", 4)]))
        });
        block_on(fx.rec.activate());
        block_on(fx.rec.toggle_like(&PostId::from("p1")));
        assert_eq!(
            *fx.calls.borrow(),
            vec!["get alice", "like p1", "get alice"]
        );
        assert_eq!(fx.rec.snapshot().posts, vec![post("p1", 4)]);
    }

    #[test]
    fn toggle_like_falls_back_to_unlike() {
        let fx = fixture(alice(), Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p1", 3)]))
                .with_fetch(Ok(vec![post("p1", 2)]))
                .with_like(Err(api_err()))
        });
        block_on(fx.rec.activate());
        block_on(fx.rec.toggle_like(&PostId::from("p1")));
        // One POST then one DELETE, in that order, then exactly one reload
        assert_eq!(
            *fx.calls.borrow(),
            vec!["get alice", "like p1", "unlike p1", "get alice"]
        );
        assert_eq!(fx.rec.snapshot().posts, vec![post("p1", 2)]);
    }

    #[test]
    fn toggle_like_double_failure_is_a_no_op() {
        let fx = fixture(alice(), Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p1", 3)]))
                .with_like(Err(api_err()))
                .with_unlike(Err(api_err()))
        });
        block_on(fx.rec.activate());
        block_on(fx.rec.toggle_like(&PostId::from("p1")));
        // No reload; the visible list is untouched
        assert_eq!(
            *fx.calls.borrow(),
            vec!["get alice", "like p1", "unlike p1"]
        );
        assert_eq!(fx.rec.snapshot().posts, vec![post("p1", 3)]);
    }

    #[test]
    fn recent_scope_hits_the_recent_endpoint() {
        let fx = fixture(FeedScope::Recent, Some(session()), |api| {
            api.with_fetch(Ok(vec![post("p1", 3)]))
        });
        block_on(fx.rec.activate());
        assert_eq!(*fx.calls.borrow(), vec!["get recent"]);
    }
}
