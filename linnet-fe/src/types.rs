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

//! # linnet-fe types & constants

use leptos::prelude::RwSignal;

use linnet_shared::User;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     linnet-fe common types                                     //
////////////////////////////////////////////////////////////////////////////////////////////////////

// A few new types for `use_context()`
#[derive(Clone, Debug)]
pub struct Api(pub String);

// and a type alias for obvious reasons: the signed-in user, if any
pub type Viewer = RwSignal<Option<User>>;

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                      linnet-fe constants                                       //
////////////////////////////////////////////////////////////////////////////////////////////////////

pub static USER_AGENT: &str = "linnet-fe/0.1.0";

/// Where the backend lives, absent any other configuration
pub static DEFAULT_API: &str = "http://127.0.0.1:8000";
