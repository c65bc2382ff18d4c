// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared home for the CLI specs under `cli/`.
//!
//! Each spec file is registered as a `[[test]]` target of the cli
//! crate and compiles standalone; this library crate only anchors the
//! directory in the workspace.
