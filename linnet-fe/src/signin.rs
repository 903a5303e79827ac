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

//! # linnet-fe "sign-in" page

use leptos::{html, prelude::*};
use tracing::{debug, error, info};

use crate::{
    feed::Destination,
    http,
    session::{BrowserSession, Session, SessionStore},
    types::{Api, Viewer},
};

/// The linnet login page
///
/// On success the session lands in the store (and the viewer signal), and navigation goes
/// home; on failure an inline message is shown and nothing is persisted.
#[component]
pub fn SignIn() -> impl IntoView {
    debug!("SignIn invoked.");

    let api = use_context::<Api>()
        .expect("No context for the API location!?")
        .0;
    let viewer = use_context::<Viewer>().expect("No context for the viewer!?");

    let username_element: NodeRef<html::Input> = NodeRef::new();
    let password_element: NodeRef<html::Input> = NodeRef::new();

    let (error, set_error): (ReadSignal<Option<String>>, WriteSignal<Option<String>>) =
        signal(None);

    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = Action::new_local(move |_: &()| {
        let username = username_element
            .get()
            .expect("<username> should be mounted")
            .value();
        let password = password_element
            .get()
            .expect("<password> should be mounted")
            .value();
        let api = api.clone();
        async move { http::login(&api, username, password).await }
    });

    Effect::new(move |_| match on_submit.value().get() {
        Some(Ok(rsp)) => {
            info!("Login successful");
            BrowserSession.save(&Session {
                token: rsp.access_token,
                user: rsp.user.clone(),
            });
            viewer.set(Some(rsp.user));
            navigate(Destination::Home.path(), Default::default());
        }
        Some(Err(err)) => {
            error!("login: {err}");
            set_error.set(Some(err.to_string()));
        }
        None => {}
    });

    view! {
        <div style="display: flex; align-items: center; justify-content: space-around; flex-direction: column;">
            <form style="padding: 1em;" on:submit=move |ev| {
                // If we don't say this, the page reloads before the HTTP call returns
                ev.prevent_default();
                on_submit.dispatch(());
            }>
                <div style="margin-bottom: 8px;">
                    <label for="username" style="width: 100px; display: inline-block;">"Username:"</label>
                    <input type="text" id="username" name="username" node_ref=username_element required />
                </div>
                <div style="margin-bottom: 12px;">
                    <label for="password" style="width: 100px; display: inline-block;">"Password:"</label>
                    <input type="password" id="password" name="password" node_ref=password_element required />
                </div>
                <div style="display: flex; align-items: center; justify-content: space-around;">
                    <input type="submit" value="Login" />
                </div>
            </form>
            <Show when=move || error.get().is_some()>
                <div style="color: red;">
                { move || error.get().unwrap_or_default() }
                </div>
            </Show>
        </div>
    }
}
