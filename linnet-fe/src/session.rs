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

//! # linnet-fe session store
//!
//! The session (bearer token + signed-in user) lives in browser localStorage so it survives a
//! page reload. It's read through the [SessionStore] trait rather than from ambient globals so
//! the feed logic can be exercised without a browser.

use tracing::error;

use linnet_shared::{
    api::{AUTH_TOKEN_KEY, USER_KEY},
    User,
};

/// The authenticated viewer: a bearer token and their display identity
///
/// Created at login, read at every page activation, destroyed at logout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

pub trait SessionStore {
    fn get(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// [SessionStore] over `window.localStorage`
pub struct BrowserSession;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<Session> {
        let storage = local_storage()?;
        let token = storage.get_item(AUTH_TOKEN_KEY).ok().flatten()?;
        let user = storage.get_item(USER_KEY).ok().flatten()?;
        // A mangled user record means the session as a whole is unusable
        let user = serde_json::from_str::<User>(&user)
            .map_err(|err| error!("deserializing the persisted user: {err}"))
            .ok()?;
        Some(Session { token, user })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = local_storage() else {
            error!("localStorage unavailable; session will not survive a reload");
            return;
        };
        let user = match serde_json::to_string(&session.user) {
            Ok(user) => user,
            Err(err) => {
                error!("serializing the user record: {err}");
                return;
            }
        };
        if storage
            .set_item(AUTH_TOKEN_KEY, &session.token)
            .and_then(|_| storage.set_item(USER_KEY, &user))
            .is_err()
        {
            error!("failed to persist the session");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
