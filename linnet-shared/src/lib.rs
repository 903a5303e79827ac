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

//! # linnet-shared
//!
//! Entity & wire types for the linnet microblog. These are the types that cross the HTTP
//! boundary, factored into their own crate so that the (wasm32) frontend doesn't have to
//! take a dependency on any backend crate in order to talk about a [`Post`].

pub mod api;
pub mod entities;

pub use entities::*;
