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

//! # linnet frontend
//!
//! A [Leptos] (CSR) client for the linnet microblog: a feed of posts you can like & unlike.
//! The interesting part-- keeping the rendered list consistent with the server when the client
//! doesn't track per-post like state-- lives in the [feed] module; everything else here is
//! routing, session plumbing & layout.
//!
//! [Leptos]: https://book.leptos.dev

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

mod feed;
mod home;
mod http;
mod posts;
mod profile;
mod session;
mod signin;
mod types;

use home::Home;
use profile::Profile;
use session::{BrowserSession, SessionStore};
use signin::SignIn;
use types::{Api, Viewer, DEFAULT_API};

#[component]
fn Header() -> impl IntoView {
    let viewer = use_context::<Viewer>().expect("No context for the viewer!?");
    let navigate = leptos_router::hooks::use_navigate();
    view! {
        <header class="banner">
            <h1 class="logo"><a href="/">"linnet"</a></h1>
            <div class="auth-actions">
                <Show when=move || viewer.get().is_some()>
                    <span class="viewer-name">
                        { move || viewer.get().map(|user| format!("@{}", user.username)).unwrap_or_default() }
                    </span>
                    " "
                    <a href="#" on:click={
                        let navigate = navigate.clone();
                        move |ev| {
                            ev.prevent_default();
                            // Logout: the session dies here, nowhere else
                            BrowserSession.clear();
                            viewer.set(None);
                            navigate(feed::Destination::Login.path(), Default::default());
                        }
                    }>"sign-out"</a>
                </Show>
                <Show when=move || viewer.get().is_none()>
                    <a href="/login">"sign-in"</a>
                </Show>
            </div>
        </header>
    }
}

/// [linnet-fe](crate) root component
#[component]
fn App() -> impl IntoView {
    // Make the API location available to every page through context rather than prop drilling
    provide_context(Api(DEFAULT_API.to_owned()));

    // The signed-in user, seeded from localStorage so a page reload doesn't look like a logout
    let viewer: Viewer = RwSignal::new(BrowserSession.get().map(|session| session.user));
    provide_context(viewer);

    view! {
        <Router>
            <Header/>
            <main>
                <Routes fallback=Home>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/login") view=SignIn/>
                    <Route path=path!("/u/:username") view=Profile/>
                </Routes>
            </main>
        </Router>
    }
}

fn main() {
    // A bog standard tracing-subscriber `Subscriber`, configured to write to the browser
    // console
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .with_ansi(false)
        .init();
    // Without this, a panic in WASM surfaces in the browser as "Unreachable executed" plus a
    // stack trace into the binary; with it, we get a Rust stack trace
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
